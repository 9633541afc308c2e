use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use linear_tools::types::Priority;

#[derive(Parser)]
#[command(name = "linear-tools")]
#[command(about = "Linear issue operations for agent tooling", version)]
#[command(after_help = "EXAMPLES:
    linear-tools get SRE-152               Fetch one issue
    linear-tools search --team SRE         List a team's issues
    linear-tools status SRE-152 \"Done\"     Move an issue
    linear-tools comment SRE-152 \"On it\"   Add a comment
    linear-tools update SRE-152 --priority 1")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch one issue by its identifier (e.g. SRE-152)
    #[command(after_help = "EXAMPLES:
    linear-tools get SRE-152
    linear-tools get SRE-152 --json")]
    Get {
        /// Issue identifier (e.g. SRE-152)
        identifier: String,
    },
    /// Search issues by text, or list them through structured filters
    #[command(after_help = "EXAMPLES:
    linear-tools search --query \"login crash\"
    linear-tools search --team SRE --state \"In Progress\"
    linear-tools search --assignee ops@example.com --limit 50")]
    Search(SearchArgs),
    /// List all teams with their workflow states
    #[command(after_help = "EXAMPLES:
    linear-tools teams
    linear-tools teams --json")]
    Teams,
    /// Move an issue to a named workflow state of its team
    #[command(after_help = "EXAMPLES:
    linear-tools status SRE-152 \"In Progress\"
    linear-tools status SRE-152 done")]
    Status {
        /// Issue identifier (e.g. SRE-152)
        identifier: String,
        /// Target state name, matched case-insensitively
        state: String,
    },
    /// Add a comment to an issue
    #[command(after_help = "EXAMPLES:
    linear-tools comment SRE-152 \"Deployed the fix\"")]
    Comment {
        /// Issue identifier (e.g. SRE-152)
        identifier: String,
        /// Comment body (markdown supported)
        body: String,
    },
    /// Update issue fields; only the supplied fields change
    #[command(after_help = "EXAMPLES:
    linear-tools update SRE-152 --title \"New title\"
    linear-tools update SRE-152 --priority 2 --assignee ops@example.com")]
    Update(UpdateArgs),
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    linear-tools completions bash > ~/.bash_completion.d/linear-tools
    linear-tools completions zsh > ~/.zfunc/_linear-tools")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Args)]
pub struct SearchArgs {
    /// Full-text query over titles and descriptions
    /// (structured filters are ignored when set)
    #[arg(long, short)]
    pub query: Option<String>,

    /// Filter by team key (e.g. SRE)
    #[arg(long)]
    pub team: Option<String>,

    /// Filter by state name, matched case-insensitively
    #[arg(long)]
    pub state: Option<String>,

    /// Filter by assignee email
    #[arg(long)]
    pub assignee: Option<String>,

    /// Maximum number of results (capped at 50)
    #[arg(long, short, default_value = "20")]
    pub limit: u32,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Issue identifier (e.g. SRE-152)
    pub identifier: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New description (markdown supported)
    #[arg(long)]
    pub description: Option<String>,

    /// New priority (0=none, 1=urgent, 2=high, 3=medium, 4=low)
    #[arg(long, value_parser = Priority::parse_arg)]
    pub priority: Option<Priority>,

    /// Email of the user to assign
    #[arg(long)]
    pub assignee: Option<String>,
}
