/// Crate name prefix shared by every workspace member.
pub const PREFIX: &str = "anum-";

/// Normalizes a project crate name to the workspace naming convention.
///
/// The facade crate is named `anum` without a suffix and is left as is.
#[must_use]
pub fn normalize_project_name(project: &str) -> String {
    if project == "anum" || project.starts_with(PREFIX) {
        project.to_owned()
    } else {
        format!("{PREFIX}{project}")
    }
}
