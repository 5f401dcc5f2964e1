//! CLI output formatting.
//!
//! Output is information-first: each project is shown by position and title,
//! with its slug and links as indented context lines.
//!
//! ```text
//! Projects
//! 001 Skyblock Tools
//!     Slug: skyblock-tools
//!     Quality-of-life tools for skyblock worlds
//! 002 vanilla-plus
//!     Slug: vanilla-plus
//!
//! 2 projects
//! ```
//!
//! Each `format_*` function is pure and returns lines for testability; the
//! `print_*` wrappers write them to stdout.

use crate::types::{Project, ProjectSummary, RouteParams, SocialLink};
use serde::Serialize;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

fn link_lines(links: &[SocialLink], depth: usize) -> Vec<String> {
    links
        .iter()
        .map(|link| format!("{}{}: {}", indent(depth), link.label, link.url))
        .collect()
}

/// Gallery listing.
pub fn format_project_list(projects: &[ProjectSummary]) -> Vec<String> {
    let mut lines = vec!["Projects".to_string()];
    for (i, project) in projects.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), project.title));
        lines.push(format!("{}Slug: {}", indent(1), project.slug));
        if !project.description.is_empty() {
            lines.push(format!("{}{}", indent(1), project.description));
        }
    }
    lines.push(String::new());
    lines.push(plural(projects.len(), "project"));
    lines
}

/// Detail view of one project. The body is shown verbatim at the end.
pub fn format_project(project: &Project) -> Vec<String> {
    let mut lines = vec![project.title.clone()];
    if !project.description.is_empty() {
        lines.push(format!("{}{}", indent(1), project.description));
    }
    lines.push(format!("{}Slug: {}", indent(1), project.slug));
    if let Some(banner) = &project.banner {
        lines.push(format!("{}Banner: {}", indent(1), banner));
    }
    if let Some(logo) = &project.logo {
        lines.push(format!("{}Logo: {}", indent(1), logo));
    }
    lines.extend(link_lines(&project.social_links, 1));

    if let Some(author) = &project.author {
        lines.push(String::new());
        lines.push("About the Author".to_string());
        let name = if author.name.is_empty() {
            "(unnamed)"
        } else {
            author.name.as_str()
        };
        lines.push(format!("{}{}", indent(1), name));
        if let Some(bio) = &author.bio {
            lines.push(format!("{}{}", indent(1), bio));
        }
        if let Some(avatar) = &author.avatar {
            lines.push(format!("{}Avatar: {}", indent(1), avatar));
        }
        lines.extend(link_lines(&author.links, 1));
    }

    let body = project.body.trim();
    if !body.is_empty() {
        lines.push(String::new());
        lines.extend(body.lines().map(String::from));
    }
    lines
}

/// Route enumeration: one path per line, then a count.
pub fn format_routes(routes: &[RouteParams]) -> Vec<String> {
    let mut lines: Vec<String> = routes.iter().map(RouteParams::path).collect();
    lines.push(String::new());
    lines.push(plural(routes.len(), "route"));
    lines
}

/// Outcome of a strict content check: one line per entry.
pub fn format_check(results: &[(String, Result<(), String>)]) -> Vec<String> {
    let mut lines = Vec::new();
    for (slug, result) in results {
        match result {
            Ok(()) => lines.push(format!("ok      {slug}")),
            Err(e) => lines.push(format!("FAILED  {slug}: {e}")),
        }
    }
    let failed = results.iter().filter(|(_, r)| r.is_err()).count();
    lines.push(String::new());
    lines.push(format!(
        "{} checked, {} failed",
        plural(results.len(), "project"),
        failed
    ));
    lines
}

/// One entry of a strict content check, as printed by `check --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckEntry<'a> {
    pub slug: &'a str,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
}

pub fn check_report(results: &[(String, Result<(), String>)]) -> Vec<CheckEntry<'_>> {
    results
        .iter()
        .map(|(slug, result)| CheckEntry {
            slug,
            ok: result.is_ok(),
            error: result.as_ref().err().map(String::as_str),
        })
        .collect()
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

pub fn print_project_list(projects: &[ProjectSummary]) {
    print_lines(format_project_list(projects));
}

pub fn print_project(project: &Project) {
    print_lines(format_project(project));
}

pub fn print_routes(routes: &[RouteParams]) {
    print_lines(format_routes(routes));
}

pub fn print_check(results: &[(String, Result<(), String>)]) {
    print_lines(format_check(results));
}
