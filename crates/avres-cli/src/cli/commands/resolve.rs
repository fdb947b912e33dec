//! `avres resolve <id>` – print the resolved asset URL.

use anyhow::Result;
use avres_core::config::ResolverConfig;
use avres_core::resolve::{self, AvatarRef};

pub fn run_resolve(cfg: &ResolverConfig, id: &str) -> Result<()> {
    let url = resolve::resolve_url(cfg, AvatarRef::Id(id));
    println!("{url}");
    Ok(())
}
