//! Plain-text layouts for resource listings.

use std::collections::BTreeMap;

use tfstate_lib::state::ResourceSummary;

use crate::output::{plural, symbols};

const UNKNOWN: &str = "unknown";

/// Resources grouped by type, types and names sorted.
///
/// ```text
/// Resources
/// ├── aws_instance (2 resources)
/// │   ├── database_server (1 instance)
/// │   └── web_server (1 instance)
/// └── aws_s3_bucket (1 resource)
///     └── app_bucket (1 instance)
/// ```
pub fn tree(resources: &[ResourceSummary]) -> String {
  let mut by_type: BTreeMap<&str, Vec<&ResourceSummary>> = BTreeMap::new();
  for resource in resources {
    by_type
      .entry(resource.resource_type.as_deref().unwrap_or(UNKNOWN))
      .or_default()
      .push(resource);
  }

  let mut out = String::from("Resources\n");
  let type_count = by_type.len();
  for (i, (resource_type, mut members)) in by_type.into_iter().enumerate() {
    let last_type = i + 1 == type_count;
    members.sort_by(|a, b| a.name.cmp(&b.name));

    let branch = if last_type { symbols::LAST_BRANCH } else { symbols::BRANCH };
    out.push_str(&format!(
      "{} {} ({})\n",
      branch,
      resource_type,
      plural(members.len(), "resource")
    ));

    let indent = if last_type {
      "    ".to_string()
    } else {
      format!("{}   ", symbols::PIPE)
    };
    for (j, member) in members.iter().enumerate() {
      let leaf = if j + 1 == members.len() {
        symbols::LAST_BRANCH
      } else {
        symbols::BRANCH
      };
      out.push_str(&format!(
        "{}{} {} ({})\n",
        indent,
        leaf,
        member.name.as_deref().unwrap_or(UNKNOWN),
        plural(member.instances, "instance")
      ));
    }
  }
  out
}

/// Aligned columns, one row per resource, sorted by address.
pub fn table(resources: &[ResourceSummary]) -> String {
  let mut rows: Vec<[String; 5]> = resources
    .iter()
    .map(|r| {
      [
        r.address.clone(),
        r.resource_type.clone().unwrap_or_else(|| UNKNOWN.to_string()),
        r.name.clone().unwrap_or_else(|| UNKNOWN.to_string()),
        r.mode.clone(),
        r.instances.to_string(),
      ]
    })
    .collect();
  rows.sort_by(|a, b| a[0].cmp(&b[0]));

  let header = ["ADDRESS", "TYPE", "NAME", "MODE", "INSTANCES"].map(str::to_string);
  let mut widths = header.clone().map(|h| h.chars().count());
  for row in &rows {
    for (width, cell) in widths.iter_mut().zip(row) {
      *width = (*width).max(cell.chars().count());
    }
  }

  let mut out = String::new();
  for row in std::iter::once(&header).chain(rows.iter()) {
    let mut line = String::new();
    for (col, cell) in row.iter().enumerate() {
      if col == 4 {
        // counts are right-aligned
        line.push_str(&format!("{:>width$}", cell, width = widths[col]));
      } else {
        line.push_str(&format!("{:<width$}  ", cell, width = widths[col]));
      }
    }
    out.push_str(line.trim_end());
    out.push('\n');
  }
  out
}

pub fn total(count: usize) -> String {
  format!("Total: {} resources", count)
}
