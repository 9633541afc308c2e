mod comment;
mod issue;
mod priority;
mod project;
mod team;
mod user;

pub use comment::{Comment, CommentAuthor};
pub use issue::{Issue, IssueSummary, Label, SummaryAssignee, SummaryState, SummaryTeam, WorkflowState};
pub use priority::Priority;
pub use project::Project;
pub use team::Team;
pub use user::User;
