//! Synthesizes the `filter:` argument of the issue listing query from
//! optional structured criteria.

use serde_json::{json, Map, Value};

/// Optional criteria for listing issues. All absent is valid and means an
/// unfiltered listing, not a filter matching nothing.
#[derive(Debug, Default, Clone)]
pub struct IssueFilter {
    pub team_key: Option<String>,
    pub state_name: Option<String>,
    pub assignee_email: Option<String>,
}

/// A synthesized filter fragment with the variable declarations it needs and
/// the values bound to them.
#[derive(Debug)]
pub struct FilterClause {
    pub declarations: Vec<&'static str>,
    pub fragment: String,
    pub bindings: Map<String, Value>,
}

impl IssueFilter {
    pub fn is_empty(&self) -> bool {
        self.team_key.is_none() && self.state_name.is_none() && self.assignee_email.is_none()
    }

    /// Each criterion maps to one fixed predicate shape; criteria conjoin by
    /// juxtaposition inside a single filter object. Values are always bound
    /// through variables, never interpolated into the document.
    pub fn to_clause(&self) -> FilterClause {
        let mut declarations = Vec::new();
        let mut predicates = Vec::new();
        let mut bindings = Map::new();

        if let Some(team_key) = &self.team_key {
            declarations.push("$teamKey: String!");
            predicates.push("team: { key: { eq: $teamKey } }");
            bindings.insert("teamKey".to_string(), json!(team_key));
        }
        if let Some(state_name) = &self.state_name {
            declarations.push("$stateName: String!");
            predicates.push("state: { name: { eqIgnoreCase: $stateName } }");
            bindings.insert("stateName".to_string(), json!(state_name));
        }
        if let Some(assignee_email) = &self.assignee_email {
            declarations.push("$assigneeEmail: String!");
            predicates.push("assignee: { email: { eq: $assigneeEmail } }");
            bindings.insert("assigneeEmail".to_string(), json!(assignee_email));
        }

        let fragment = if predicates.is_empty() {
            String::new()
        } else {
            format!(", filter: {{ {} }}", predicates.join(", "))
        };

        FilterClause {
            declarations,
            fragment,
            bindings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_criteria_yields_empty_clause() {
        let filter = IssueFilter::default();
        assert!(filter.is_empty());
        let clause = filter.to_clause();
        assert!(clause.fragment.is_empty());
        assert!(clause.declarations.is_empty());
        assert!(clause.bindings.is_empty());
    }

    #[test]
    fn team_key_maps_to_key_equality() {
        let filter = IssueFilter {
            team_key: Some("SRE".to_string()),
            ..Default::default()
        };
        let clause = filter.to_clause();
        assert_eq!(
            clause.fragment,
            ", filter: { team: { key: { eq: $teamKey } } }"
        );
        assert_eq!(clause.declarations, vec!["$teamKey: String!"]);
        assert_eq!(clause.bindings["teamKey"], json!("SRE"));
    }

    #[test]
    fn state_name_matches_case_insensitively_on_the_wire() {
        let filter = IssueFilter {
            state_name: Some("In Progress".to_string()),
            ..Default::default()
        };
        let clause = filter.to_clause();
        assert!(clause.fragment.contains("eqIgnoreCase: $stateName"));
        assert_eq!(clause.bindings["stateName"], json!("In Progress"));
    }

    #[test]
    fn multiple_criteria_conjoin_in_one_object() {
        let filter = IssueFilter {
            team_key: Some("SRE".to_string()),
            state_name: Some("Done".to_string()),
            assignee_email: Some("ops@example.com".to_string()),
        };
        let clause = filter.to_clause();
        assert_eq!(
            clause.fragment,
            ", filter: { team: { key: { eq: $teamKey } }, \
             state: { name: { eqIgnoreCase: $stateName } }, \
             assignee: { email: { eq: $assigneeEmail } } }"
        );
        assert_eq!(clause.declarations.len(), 3);
        assert_eq!(clause.bindings.len(), 3);
    }

    #[test]
    fn bindings_parallel_declarations() {
        let filter = IssueFilter {
            assignee_email: Some("ops@example.com".to_string()),
            ..Default::default()
        };
        let clause = filter.to_clause();
        assert_eq!(clause.declarations, vec!["$assigneeEmail: String!"]);
        assert_eq!(clause.bindings.len(), 1);
        assert_eq!(clause.bindings["assigneeEmail"], json!("ops@example.com"));
    }
}
