//! Request URL construction for the statcast search CSV endpoint.

use crate::filters::{FilterSpec, IterationUnit};

/// Build the request URL for one iteration unit. Pure string construction:
/// identical inputs always yield identical URLs.
pub fn build_search_url(base: &str, spec: &FilterSpec, unit: &IterationUnit) -> String {
    let mut url = format!("{base}/statcast_search/csv?all=true&type=details");

    if !spec.pitch_types.is_empty() {
        url.push_str("&hfPT=");
        for pitch_type in &spec.pitch_types {
            url.push_str(&format!("{}|", pitch_type.to_uppercase()));
        }
    }

    if !spec.events.is_empty() {
        url.push_str("&hfAB=");
        for event in &spec.events {
            url.push_str(&format!("{}|", event.replace(' ', "\\.\\.")));
        }
    }

    if !spec.descriptions.is_empty() {
        url.push_str("&hfPR=");
        for description in &spec.descriptions {
            url.push_str(&format!("{}|", description.replace(' ', "\\.\\.")));
        }
    }

    match unit {
        IterationUnit::Game(game_pk) => {
            url.push_str(&format!("&game_pk={game_pk}"));
        }
        IterationUnit::Date(day) => {
            let day = day.format("%Y-%m-%d").to_string();
            url.push_str(&format!("&game_date_gt={day}&game_date_lt={day}"));
        }
    }

    for pitcher_id in &spec.pitcher_ids {
        url.push_str(&format!("&pitchers_lookup[]={pitcher_id}"));
    }

    for batter_id in &spec.batter_ids {
        url.push_str(&format!("&batters_lookup[]={batter_id}"));
    }

    // The team filter only applies when nothing more specific narrows the
    // query already.
    if !spec.teams.is_empty() {
        if matches!(unit, IterationUnit::Game(_)) || spec.has_player_filter() {
            tracing::warn!(
                "team filter ignored: game, pitcher or batter filters already narrow the query"
            );
        } else {
            url.push_str("&player_type=pitcher|batter|&hfTeam=");
            for team in &spec.teams {
                url.push_str(&format!("{team}|"));
            }
        }
    }

    url
}
