mod cli;
mod output;

use std::error::Error;
use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use linear_tools::client::LinearClient;
use linear_tools::config::Config;
use linear_tools::error::Result;
use linear_tools::filter::IssueFilter;
use linear_tools::ops::{comments, issues, teams, ToolReply};
use linear_tools::types::Priority;

use cli::{Cli, Commands};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");

        // Show error chain if verbose flag was passed
        if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = Error::source(cause);
            }
        }

        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    output::set_json_output(cli.json);

    match cli.command {
        // The only command that needs no credential
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "linear-tools", &mut io::stdout());
        }
        command => {
            let config = Config::load()?;
            let client = LinearClient::new(config.api_key()?)?;
            let mode = config.match_mode();

            match command {
                Commands::Get { identifier } => {
                    let reply = issues::get_issue(&client, &identifier, mode).await?;
                    if output::is_json_output() {
                        output::print_json(&reply);
                    } else {
                        match &reply {
                            ToolReply::Success(issue) => output::print_issue_detail(issue),
                            ToolReply::Error { error } => println!("{error}"),
                        }
                    }
                }
                Commands::Search(args) => {
                    let filter = IssueFilter {
                        team_key: args.team,
                        state_name: args.state,
                        assignee_email: args.assignee,
                    };
                    let reply =
                        issues::search_issues(&client, args.query.as_deref(), &filter, args.limit)
                            .await?;
                    if output::is_json_output() {
                        output::print_json(&reply);
                    } else {
                        output::print_issue_table(&reply.issues);
                    }
                }
                Commands::Teams => {
                    let reply = teams::list_teams(&client).await?;
                    if output::is_json_output() {
                        output::print_json(&reply);
                    } else {
                        output::print_team_table(&reply.teams);
                    }
                }
                Commands::Status { identifier, state } => {
                    let reply =
                        issues::update_issue_status(&client, &identifier, &state, mode).await?;
                    if output::is_json_output() {
                        output::print_json(&reply);
                    } else {
                        match &reply {
                            ToolReply::Success(update) => {
                                if let Some(issue) = &update.issue {
                                    println!(
                                        "Updated {} - {} is now {}",
                                        issue.identifier, issue.title, issue.state.name
                                    );
                                }
                            }
                            ToolReply::Error { error } => println!("{error}"),
                        }
                    }
                }
                Commands::Comment { identifier, body } => {
                    let reply = comments::add_comment(&client, &identifier, &body, mode).await?;
                    if output::is_json_output() {
                        output::print_json(&reply);
                    } else {
                        match &reply {
                            ToolReply::Success(_) => println!("Added comment to {identifier}"),
                            ToolReply::Error { error } => println!("{error}"),
                        }
                    }
                }
                Commands::Update(args) => {
                    let update = issues::IssueUpdate {
                        title: args.title,
                        description: args.description,
                        priority: args.priority.map(Priority::as_i32),
                        assignee_email: args.assignee,
                    };
                    let reply =
                        issues::update_issue(&client, &args.identifier, update, mode).await?;
                    if output::is_json_output() {
                        output::print_json(&reply);
                    } else {
                        match &reply {
                            ToolReply::Success(result) => {
                                if let Some(issue) = &result.issue {
                                    println!("Updated {} - {}", issue.identifier, issue.title);
                                }
                            }
                            ToolReply::Error { error } => println!("{error}"),
                        }
                    }
                }
                Commands::Completions { .. } => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
