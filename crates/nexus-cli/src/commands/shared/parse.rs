use std::str::FromStr;

use nexus_core::CoreError;

use crate::context::AppContext;

/// Parse one of the domain enums; accepts `-` for `_` and any case.
pub fn parse_enum<T>(raw: &str) -> anyhow::Result<T>
where
    T: FromStr<Err = CoreError>,
{
    Ok(raw.parse::<T>()?)
}

pub fn parse_optional<T>(raw: Option<&str>) -> anyhow::Result<Option<T>>
where
    T: FromStr<Err = CoreError>,
{
    raw.map(parse_enum).transpose()
}

/// Resolve a project given by id, slug or name to its id.
pub async fn resolve_project(ctx: &mut AppContext, raw: &str) -> anyhow::Result<i64> {
    let session = &mut ctx.session;
    if session.projects.projects().is_empty() {
        session.projects.fetch_projects(&session.api).await;
    }
    session
        .projects
        .find(raw)
        .map(|project| project.id)
        .ok_or_else(|| anyhow::anyhow!("unknown project '{raw}' (see `nexus projects`)"))
}

pub async fn resolve_optional_project(
    ctx: &mut AppContext,
    raw: Option<&str>,
) -> anyhow::Result<Option<i64>> {
    match raw {
        Some(raw) => resolve_project(ctx, raw).await.map(Some),
        None => Ok(None),
    }
}
