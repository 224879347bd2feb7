//! The ordered predicate pipeline applied to every candidate.

use crate::name::INNER_CLASS_MARKER;
use classhound_api::{ClassInspector, Resource};

/// Accumulated filter configuration.
///
/// Mutable between scans, read-only during one; changes only affect
/// subsequent scans.
#[derive(Debug, Default)]
pub struct FilterConfig {
    begin_name_filters: Vec<String>,
    resources_only: bool,
    classes_only: bool,
    exclude_inner_classes: bool,
    type_annotation: Option<String>,
    member_annotation: Option<String>,
}

impl FilterConfig {
    /// Require canonical names to start with `prefix`. Repeatable; all
    /// configured prefixes must match.
    pub fn add_begin_name(&mut self, prefix: impl Into<String>) {
        self.begin_name_filters.push(prefix.into());
    }

    /// Restrict to class entries. Clears the resources-only restriction.
    pub fn classes_only(&mut self) {
        self.classes_only = true;
        self.resources_only = false;
    }

    /// Restrict to non-class entries. Clears the classes-only restriction.
    pub fn resources_only(&mut self) {
        self.resources_only = true;
        self.classes_only = false;
    }

    pub fn exclude_inner_classes(&mut self) {
        self.exclude_inner_classes = true;
    }

    pub fn require_type_annotation(&mut self, annotation: impl Into<String>) {
        self.type_annotation = Some(annotation.into());
    }

    pub fn require_member_annotation(&mut self, annotation: impl Into<String>) {
        self.member_annotation = Some(annotation.into());
    }

    fn wants_metadata(&self) -> bool {
        self.type_annotation.is_some() || self.member_annotation.is_some()
    }

    /// Evaluate the pipeline for one candidate.
    ///
    /// Checks run in a fixed order and short-circuit on the first rejection,
    /// so class loading only happens for candidates that already passed every
    /// name-level check. Load failures reject the candidate and are recorded
    /// in `messages`.
    pub fn accepts(
        &self,
        resource: &Resource,
        inspector: Option<&dyn ClassInspector>,
        messages: &mut Vec<String>,
    ) -> bool {
        if self.classes_only && !resource.is_class() {
            return false;
        }
        if self.resources_only && resource.is_class() {
            return false;
        }
        // Annotation predicates only ever apply to classes.
        if self.wants_metadata() && !resource.is_class() {
            return false;
        }
        if self.exclude_inner_classes
            && resource.is_class()
            && resource.name().contains(INNER_CLASS_MARKER)
        {
            return false;
        }
        if !self
            .begin_name_filters
            .iter()
            .all(|prefix| resource.name().starts_with(prefix))
        {
            return false;
        }

        if let Some(annotation) = &self.type_annotation {
            let meta = match load(resource, inspector) {
                Ok(meta) => meta,
                Err(reason) => {
                    messages.push(format!(
                        "failed to load class {}: {reason}",
                        resource.name()
                    ));
                    return false;
                }
            };
            if !meta.has_type_annotation(annotation) {
                return false;
            }
        }

        if let Some(annotation) = &self.member_annotation {
            let meta = match load(resource, inspector) {
                Ok(meta) => meta,
                Err(reason) => {
                    messages.push(format!(
                        "failed to inspect members of class {}: {reason}",
                        resource.name()
                    ));
                    return false;
                }
            };
            if !meta
                .members()
                .iter()
                .any(|member| member.has_annotation(annotation))
            {
                return false;
            }
        }

        true
    }
}

fn load(
    resource: &Resource,
    inspector: Option<&dyn ClassInspector>,
) -> Result<Box<dyn classhound_api::ClassMetadata>, String> {
    let Some(inspector) = inspector else {
        return Err("no inspector configured".to_string());
    };
    inspector
        .load_and_inspect(resource.name())
        .map_err(|err| err.to_string())
}
