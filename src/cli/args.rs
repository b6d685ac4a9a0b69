use clap::Parser;

/// Find NBA full-game highlights on YouTube and open one in the browser
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "hoop-watcher", author, version, about, long_about = None)]
pub struct Cli {
    /// Teams playing, at most two, joined by ',' (e.g. "knicks,grizzlies")
    #[arg(short = 't', long = "teams", visible_alias = "tm")]
    pub teams: Option<String>,

    /// Game date as YYYY-MM-DD or YYYY-MM; defaults to today
    #[arg(short = 'd', long = "date", conflicts_with = "no_date")]
    pub date: Option<String>,

    /// Leave the date out of the search entirely
    #[arg(long)]
    pub no_date: bool,

    /// How many search results to request (1-50)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=50))]
    pub max_results: Option<u32>,

    /// Print the highlights without opening one
    #[arg(long)]
    pub no_open: bool,
}
