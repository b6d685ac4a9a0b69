//! Conversions between the `teams` table rows and `TeamRecord`
use crate::modules::team::domain::entities::{Conference, TeamRecord};
use crate::modules::team::infrastructure::models::{NewTeam, TeamModel};

pub fn model_to_entity(model: TeamModel) -> TeamRecord {
    // An unknown conference string is dropped rather than failing the read
    let conference = model
        .conference
        .as_deref()
        .and_then(|value| value.parse::<Conference>().ok());

    TeamRecord {
        id: model.id,
        name: model.name,
        abbreviation: model.abbreviation,
        city: model.city,
        conference,
        division: model.division,
        is_favorited: model.is_favorited,
    }
}

/// `position` is the team's index in the catalog it was seeded from
pub fn entity_to_new_model(entity: &TeamRecord, position: i32) -> NewTeam {
    NewTeam {
        id: entity.id,
        name: entity.name.clone(),
        abbreviation: entity.abbreviation.clone(),
        city: entity.city.clone(),
        conference: entity.conference.map(|c| c.as_str().to_string()),
        division: entity.division.clone(),
        is_favorited: entity.is_favorited,
        position,
    }
}
