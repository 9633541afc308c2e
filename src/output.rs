use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use linear_tools::ops::teams::TeamWithStates;
use linear_tools::types::{Issue, IssueSummary, Priority};

static OUTPUT_JSON: AtomicBool = AtomicBool::new(false);

pub fn set_json_output(json: bool) {
    OUTPUT_JSON.store(json, Ordering::Relaxed);
}

pub fn is_json_output() -> bool {
    OUTPUT_JSON.load(Ordering::Relaxed)
}

/// Print any payload as pretty JSON.
pub fn print_json<T: Serialize>(payload: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(payload).unwrap_or_default()
    );
}

#[derive(Tabled)]
struct IssueRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Assignee")]
    assignee: String,
    #[tabled(rename = "Team")]
    team: String,
}

impl From<&IssueSummary> for IssueRow {
    fn from(issue: &IssueSummary) -> Self {
        Self {
            id: issue.identifier.clone(),
            title: truncate(&issue.title, 50),
            status: status_colored(&issue.state.name, &issue.state.state_type),
            priority: Priority::from_i32(issue.priority).colored(),
            assignee: issue
                .assignee
                .as_ref()
                .map(|u| u.name.clone())
                .unwrap_or_default(),
            team: issue.team.key.clone(),
        }
    }
}

#[derive(Tabled)]
struct TeamRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "States")]
    states: String,
}

impl From<&TeamWithStates> for TeamRow {
    fn from(team: &TeamWithStates) -> Self {
        Self {
            key: team.key.clone(),
            name: team.name.clone(),
            states: team
                .states
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

pub fn print_issue_table(issues: &[IssueSummary]) {
    if issues.is_empty() {
        println!("No issues found");
        return;
    }
    let rows: Vec<IssueRow> = issues.iter().map(IssueRow::from).collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");
}

pub fn print_team_table(teams: &[TeamWithStates]) {
    let rows: Vec<TeamRow> = teams.iter().map(TeamRow::from).collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");
}

pub fn print_issue_detail(issue: &Issue) {
    println!("{} - {}", issue.identifier.bold(), issue.title);
    println!();

    if let Some(desc) = &issue.description {
        println!("{desc}");
        println!();
    }

    println!("Team:     {}", issue.team.name);
    println!(
        "Status:   {}",
        status_colored(&issue.state.name, &issue.state.state_type)
    );
    println!("Priority: {}", Priority::from_i32(issue.priority).colored());
    println!(
        "Assignee: {}",
        issue.assignee.as_ref().map(|u| &u.name[..]).unwrap_or("-")
    );
    if !issue.labels.is_empty() {
        println!(
            "Labels:   {}",
            issue
                .labels
                .iter()
                .map(|l| l.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    if let Some(project) = &issue.project {
        println!("Project:  {}", project.name);
    }

    if !issue.comments.is_empty() {
        println!();
        println!("Comments:");
        for comment in &issue.comments {
            let author = comment
                .user
                .as_ref()
                .map(|u| u.name.as_str())
                .unwrap_or("Unknown");
            println!(
                "  {} ({}): {}",
                author.bold(),
                format_relative(&comment.created_at),
                truncate(&comment.body.replace('\n', " "), 70)
            );
        }
    }
}

/// Color a state name by its workflow category.
pub fn status_colored(name: &str, state_type: &str) -> String {
    match state_type {
        "completed" => name.green().to_string(),
        "started" => name.blue().to_string(),
        "canceled" => name.red().to_string(),
        "backlog" | "triage" => name.bright_black().to_string(),
        _ => name.to_string(),
    }
}

fn format_date_only(iso: &str) -> String {
    use chrono::{DateTime, Utc};

    if let Ok(dt) = iso.parse::<DateTime<Utc>>() {
        dt.format("%Y-%m-%d").to_string()
    } else {
        iso.split('T').next().unwrap_or(iso).to_string()
    }
}

/// Format a relative time (e.g., "2 days ago")
pub fn format_relative(iso: &str) -> String {
    use chrono::{DateTime, Utc};

    if let Ok(dt) = iso.parse::<DateTime<Utc>>() {
        let now = Utc::now();
        let diff = now.signed_duration_since(dt);

        if diff.num_seconds() < 60 {
            "just now".to_string()
        } else if diff.num_minutes() < 60 {
            let mins = diff.num_minutes();
            format!("{} min{} ago", mins, if mins == 1 { "" } else { "s" })
        } else if diff.num_hours() < 24 {
            let hours = diff.num_hours();
            format!("{} hour{} ago", hours, if hours == 1 { "" } else { "s" })
        } else if diff.num_days() < 30 {
            let days = diff.num_days();
            format!("{} day{} ago", days, if days == 1 { "" } else { "s" })
        } else {
            format_date_only(iso)
        }
    } else {
        iso.split('T').next().unwrap_or(iso).to_string()
    }
}

/// Truncate a string with ellipsis, backing up to a char boundary so
/// multi-byte titles cannot split a character.
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max.saturating_sub(3);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}
