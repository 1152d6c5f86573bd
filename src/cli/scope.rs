use super::{print_nodes, CliContext};
use crate::error::Result;
use crate::region::RegionCode;
use crate::scope::{extract_scope, is_within_scope, ScopeDescriptor, ScopeLevel};

fn descriptor(level: ScopeLevel, code: Option<RegionCode>) -> ScopeDescriptor {
    ScopeDescriptor::new(level, code.unwrap_or(RegionCode::NO_MATCH))
}

/// Print the subtree visible under a scope.
pub fn run_scope(
    ctx: &CliContext,
    level: ScopeLevel,
    code: Option<RegionCode>,
    json: bool,
) -> Result<()> {
    let descriptor = descriptor(level, code);
    let subtree = extract_scope(ctx.tree.nodes(), &descriptor);

    if let Err(e) = subtree.require_accessible(&descriptor) {
        eprintln!("region-scope: no accessible regions ({e})");
        std::process::exit(1);
    }

    print_nodes(subtree.nodes(), json)
}

/// Check whether a target code falls inside a scope.
pub fn run_check(
    ctx: &CliContext,
    level: ScopeLevel,
    code: Option<RegionCode>,
    target: RegionCode,
) -> Result<()> {
    let descriptor = descriptor(level, code);
    if is_within_scope(ctx.tree.nodes(), target, &descriptor) {
        println!("allowed");
        Ok(())
    } else {
        println!("denied");
        eprintln!("region-scope: {} is outside scope {}", target, descriptor);
        std::process::exit(1);
    }
}
