//! Composes the sparse issue-update mutation. Only fields the caller
//! actually supplied may appear in the document or the variables; Linear
//! treats an explicit null differently from an omitted field.

use serde_json::{json, Map, Value};

const UPDATED_ISSUE_SELECTION: &str = "\
      id
      identifier
      title
      description
      priority
      priorityLabel
      state {
        name
      }
      assignee {
        name
        email
      }";

/// One recognized optional field: its variable declaration, the input-field
/// assignment referencing that variable, and the bound value.
struct FieldTriple {
    declaration: &'static str,
    assignment: &'static str,
    variable: &'static str,
    value: Value,
}

/// Accumulates supplied fields and composes the minimal mutation. The field
/// set is closed: title, description, priority, and a resolved assignee id.
pub struct IssueUpdateBuilder {
    issue_id: String,
    fields: Vec<FieldTriple>,
}

#[derive(Debug)]
pub struct ComposedMutation {
    pub document: String,
    pub variables: Value,
}

impl IssueUpdateBuilder {
    pub fn new(issue_id: impl Into<String>) -> Self {
        Self {
            issue_id: issue_id.into(),
            fields: Vec::new(),
        }
    }

    pub fn title(&mut self, title: String) {
        self.push("$title: String!", "title: $title", "title", json!(title));
    }

    pub fn description(&mut self, description: String) {
        self.push(
            "$description: String!",
            "description: $description",
            "description",
            json!(description),
        );
    }

    pub fn priority(&mut self, priority: i32) {
        self.push(
            "$priority: Int!",
            "priority: $priority",
            "priority",
            json!(priority),
        );
    }

    // Nullable on the wire: Linear's IssueUpdateInput.assigneeId is String.
    pub fn assignee_id(&mut self, assignee_id: String) {
        self.push(
            "$assigneeId: String",
            "assigneeId: $assigneeId",
            "assigneeId",
            json!(assignee_id),
        );
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn push(
        &mut self,
        declaration: &'static str,
        assignment: &'static str,
        variable: &'static str,
        value: Value,
    ) {
        self.fields.push(FieldTriple {
            declaration,
            assignment,
            variable,
            value,
        });
    }

    /// Returns `None` when no field was supplied; callers must surface that
    /// before any mutation request is sent.
    pub fn build(self) -> Option<ComposedMutation> {
        if self.fields.is_empty() {
            return None;
        }

        let mut declarations = vec!["$issueId: String!"];
        let mut assignments = Vec::new();
        let mut bindings = Map::new();
        bindings.insert("issueId".to_string(), json!(self.issue_id));

        for field in self.fields {
            declarations.push(field.declaration);
            assignments.push(field.assignment);
            bindings.insert(field.variable.to_string(), field.value);
        }

        let document = format!(
            "mutation UpdateIssue({}) {{\n  issueUpdate(id: $issueId, input: {{ {} }}) {{\n    success\n    issue {{\n{}\n    }}\n  }}\n}}",
            declarations.join(", "),
            assignments.join(", "),
            UPDATED_ISSUE_SELECTION,
        );

        Some(ComposedMutation {
            document,
            variables: Value::Object(bindings),
        })
    }
}
