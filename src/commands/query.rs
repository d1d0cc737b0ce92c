//! Print the GraphQL request sent for a post

use anyhow::Result;

use crate::content::query;

/// Print the query text, or the full request body when a slug is given
pub fn run(slug: Option<&str>) -> Result<()> {
    println!("{}", render(slug)?);
    Ok(())
}

fn render(slug: Option<&str>) -> Result<String> {
    match slug {
        Some(slug) => Ok(serde_json::to_string_pretty(&query::post_by_slug(slug))?),
        None => Ok(query::post_by_slug_query()),
    }
}
