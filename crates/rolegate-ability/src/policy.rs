//! Policy-builder seam.
//!
//! [`PolicyBuilder`] is the contact point with the external
//! permission-evaluation collaborator: rule definitions receive a
//! builder and register grant/deny rules against it. This crate only
//! *produces* policy objects by applying definitions in a fixed order;
//! evaluating "can perform action on subject" against a built policy
//! belongs to the collaborator (whose usual contract is that the most
//! recently added matching rule wins).

/// Rule registration surface offered to rule definitions.
///
/// A fresh implementor is created per authorization check, bound to
/// the acting entity by the caller, populated by the resolver, and
/// discarded after use. Conditions beyond action/subject matching are
/// the collaborator's concern.
///
/// # Example
///
/// ```
/// use rolegate_ability::PolicyBuilder;
///
/// #[derive(Default)]
/// struct RuleLog(Vec<String>);
///
/// impl PolicyBuilder for RuleLog {
///     fn allow(&mut self, action: &str, subject: &str) {
///         self.0.push(format!("allow {action} {subject}"));
///     }
///
///     fn deny(&mut self, action: &str, subject: &str) {
///         self.0.push(format!("deny {action} {subject}"));
///     }
/// }
///
/// let mut log = RuleLog::default();
/// log.allow("read", "Post");
/// log.deny("destroy", "Post");
/// assert_eq!(log.0, vec!["allow read Post", "deny destroy Post"]);
/// ```
pub trait PolicyBuilder {
    /// Registers a rule granting `action` on `subject`.
    fn allow(&mut self, action: &str, subject: &str);

    /// Registers a rule denying `action` on `subject`.
    fn deny(&mut self, action: &str, subject: &str);
}


#[cfg(test)]
mod tests {
    use super::test_support::RecordingAbility;
    use super::*;

    #[test]
    fn unmatched_action_defaults_to_denied() {
        let ability = RecordingAbility::default();
        assert!(!ability.can("read", "Post"));
    }

    #[test]
    fn allow_then_deny_last_rule_wins() {
        let mut ability = RecordingAbility::default();
        ability.allow("destroy", "Post");
        ability.deny("destroy", "Post");
        assert!(!ability.can("destroy", "Post"));
    }

    #[test]
    fn deny_then_allow_last_rule_wins() {
        let mut ability = RecordingAbility::default();
        ability.deny("destroy", "Post");
        ability.allow("destroy", "Post");
        assert!(ability.can("destroy", "Post"));
    }

    #[test]
    fn rules_are_scoped_to_action_and_subject() {
        let mut ability = RecordingAbility::default();
        ability.allow("read", "Post");
        assert!(ability.can("read", "Post"));
        assert!(!ability.can("read", "Comment"));
        assert!(!ability.can("destroy", "Post"));
    }

    #[test]
    fn trait_object_usable() {
        let mut ability = RecordingAbility::default();
        {
            let builder: &mut dyn PolicyBuilder = &mut ability;
            builder.allow("read", "Post");
        }
        assert!(ability.can("read", "Post"));
    }
}
