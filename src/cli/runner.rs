use chrono::NaiveDate;
use std::io::{BufRead, Write};
use std::sync::Arc;

use super::args::Cli;
use super::prompt::{parse_choice, prompt_line};
use crate::modules::highlight::{
    application::HighlightService,
    domain::{entities::Highlight, value_objects::GameDate},
    traits::VideoSearchClient,
};
use crate::modules::team::domain::{
    entities::TeamRecord, services::QueryResolver, value_objects::TeamQuery, TeamCatalog,
};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};

const TEAM_PROMPT: &str = "Enter the NBA team you want to get highlights for:";
const CHOICE_PROMPT: &str = "Which one do you want to view? (enter the corresponding number)";

/// One interactive session: resolve teams, search, list, pick.
pub struct Runner<'a> {
    catalog: &'a TeamCatalog,
    resolver: QueryResolver,
    highlight_service: HighlightService,
}

impl<'a> Runner<'a> {
    pub fn new(
        catalog: &'a TeamCatalog,
        search_client: Arc<dyn VideoSearchClient>,
        config: &AppConfig,
        args: &Cli,
    ) -> Self {
        let mut config = config.clone();
        if let Some(max_results) = args.max_results {
            config.max_results = max_results;
        }

        Self {
            catalog,
            resolver: QueryResolver::new(),
            // The CLI decides the date itself; see `game_date`
            highlight_service: HighlightService::from_config(search_client, &config)
                .with_default_to_today(false),
        }
    }

    /// `None` with `--no-date`, otherwise the given date or today
    pub fn game_date(args: &Cli, today: NaiveDate) -> AppResult<Option<NaiveDate>> {
        if args.no_date {
            return Ok(None);
        }
        let date = GameDate::parse(args.date.as_deref().unwrap_or(""), today)?;
        Ok(Some(date.date()))
    }

    /// Exact resolution of the `--teams` value. More than two fragments is an
    /// error; fragments that match nothing are dropped.
    pub fn teams_from_args(&self, args: &Cli) -> AppResult<Vec<TeamRecord>> {
        let query = TeamQuery::parse(args.teams.as_deref().unwrap_or(""))?;
        Ok(self.resolver.resolve_all(&query, self.catalog))
    }

    /// Ask for one team and resolve it fuzzily
    pub fn prompt_for_team<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> AppResult<TeamRecord> {
        let answer = prompt_line(input, output, TEAM_PROMPT)?;
        self.resolver
            .resolve_fuzzy(&answer, self.catalog)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Unknown team '{}'", answer)))
    }

    pub fn print_highlights<W: Write>(output: &mut W, highlights: &[Highlight]) -> AppResult<()> {
        for (index, highlight) in highlights.iter().enumerate() {
            writeln!(output, "{}", highlight.label(index + 1))?;
        }
        Ok(())
    }

    pub fn choose_highlight<'h, R: BufRead, W: Write>(
        input: &mut R,
        output: &mut W,
        highlights: &'h [Highlight],
    ) -> AppResult<&'h Highlight> {
        let answer = prompt_line(input, output, CHOICE_PROMPT)?;
        let index = parse_choice(&answer, highlights.len())?;
        Ok(&highlights[index])
    }

    /// Run the whole flow and return the chosen highlight, or `None` when the
    /// search found nothing worth showing.
    pub async fn execute<R: BufRead, W: Write>(
        &self,
        args: &Cli,
        today: NaiveDate,
        input: &mut R,
        output: &mut W,
    ) -> AppResult<Option<Highlight>> {
        // Both inputs are validated before anything is searched or prompted
        let date = Self::game_date(args, today)?;
        let mut teams = self.teams_from_args(args)?;

        if teams.is_empty() {
            teams = vec![self.prompt_for_team(input, output)?];
        }

        let highlights = self.highlight_service.get_highlights(&teams, date).await?;
        if highlights.is_empty() {
            writeln!(output, "No highlights found")?;
            return Ok(None);
        }

        Self::print_highlights(output, &highlights)?;
        let chosen = Self::choose_highlight(input, output, &highlights)?;
        Ok(Some(chosen.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::highlight::domain::entities::SearchResult;
    use crate::modules::highlight::traits::MockVideoSearchClient;
    use crate::modules::team::infrastructure::CatalogLoader;
    use clap::Parser;
    use mockall::predicate::*;
    use std::io::Cursor;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn args(argv: &[&str]) -> Cli {
        let mut full = vec!["hoop-watcher"];
        full.extend_from_slice(argv);
        Cli::try_parse_from(full).unwrap()
    }

    fn client_returning(query: &'static str, results: Vec<SearchResult>) -> MockVideoSearchClient {
        let mut client = MockVideoSearchClient::new();
        client.expect_service_name().return_const("Mock");
        client
            .expect_search_videos()
            .with(eq(query), always())
            .times(1)
            .returning(move |_, _| Ok(results.clone()));
        client
    }

    #[test]
    fn test_game_date_defaults_to_today() {
        assert_eq!(Runner::game_date(&args(&[]), today()).unwrap(), Some(today()));
        assert_eq!(Runner::game_date(&args(&["--no-date"]), today()).unwrap(), None);
        assert!(Runner::game_date(&args(&["-d", "soon"]), today()).is_err());
    }

    #[test]
    fn test_too_many_teams_is_rejected() {
        let catalog = CatalogLoader::builtin().unwrap();
        let runner = Runner::new(
            &catalog,
            Arc::new(MockVideoSearchClient::new()),
            &AppConfig::default(),
            &Cli::default(),
        );
        let result = runner.teams_from_args(&args(&["-t", "knicks,knicks,knicks"]));
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_flow_with_teams_flag() {
        let catalog = CatalogLoader::builtin().unwrap();
        let client = client_returning(
            "'New York Knicks vs Memphis Grizzlies NBA Full Game Highlights January 1, 2023'",
            vec![
                SearchResult::new("v1", "Grizzlies at Knicks Full Game Highlights", "NBA"),
                SearchResult::new("v2", "Knicks vs Grizzlies HIGHLIGHTS", "MSG"),
            ],
        );
        let cli = args(&["-t", "knicks,grizzlies", "-d", "2023-01-01"]);
        let runner = Runner::new(&catalog, Arc::new(client), &AppConfig::default(), &cli);

        let mut input = Cursor::new("2\n");
        let mut output = Vec::new();
        let chosen = runner
            .execute(&cli, today(), &mut input, &mut output)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(chosen.url, "https://www.youtube.com/watch?v=v2");
        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains(
            "[1] https://www.youtube.com/watch?v=v1 : Grizzlies at Knicks Full Game Highlights"
        ));
        assert!(printed.contains("[2] https://www.youtube.com/watch?v=v2"));
    }

    #[tokio::test]
    async fn test_prompts_and_resolves_fuzzily_when_no_team_given() {
        let catalog = CatalogLoader::builtin().unwrap();
        let client = client_returning(
            "'New York Knicks NBA Full Game Highlights'",
            vec![SearchResult::new("v1", "Knicks Highlights", "NBA")],
        );
        let cli = args(&["--no-date"]);
        let runner = Runner::new(&catalog, Arc::new(client), &AppConfig::default(), &cli);

        let mut input = Cursor::new("kncks\n1\n");
        let mut output = Vec::new();
        let chosen = runner
            .execute(&cli, today(), &mut input, &mut output)
            .await
            .unwrap();

        assert_eq!(chosen.map(|h| h.title), Some("Knicks Highlights".to_string()));
        assert!(String::from_utf8(output).unwrap().starts_with(TEAM_PROMPT));
    }

    #[tokio::test]
    async fn test_no_highlights_skips_choice() {
        let catalog = CatalogLoader::builtin().unwrap();
        let client = client_returning(
            "'Memphis Grizzlies NBA Full Game Highlights'",
            vec![SearchResult::new("v1", "Grizzlies media day", "NBA")],
        );
        let cli = args(&["-t", "mem", "--no-date"]);
        let runner = Runner::new(&catalog, Arc::new(client), &AppConfig::default(), &cli);

        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let chosen = runner
            .execute(&cli, today(), &mut input, &mut output)
            .await
            .unwrap();

        assert!(chosen.is_none());
        assert_eq!(String::from_utf8(output).unwrap(), "No highlights found\n");
    }

    #[tokio::test]
    async fn test_out_of_range_choice_is_error() {
        let catalog = CatalogLoader::builtin().unwrap();
        let client = client_returning(
            "'Memphis Grizzlies NBA Full Game Highlights'",
            vec![SearchResult::new("v1", "Grizzlies Highlights", "NBA")],
        );
        let cli = args(&["-t", "grizzlies", "--no-date"]);
        let runner = Runner::new(&catalog, Arc::new(client), &AppConfig::default(), &cli);

        let mut input = Cursor::new("2\n");
        let mut output = Vec::new();
        let result = runner.execute(&cli, today(), &mut input, &mut output).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
