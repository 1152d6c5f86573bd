use super::{print_nodes, CliContext};
use crate::error::Result;
use crate::region::{self, RegionCode};

/// Print the full region tree.
pub fn run_tree(ctx: &CliContext, json: bool) -> Result<()> {
    print_nodes(ctx.tree.nodes(), json)?;
    eprintln!(
        "region-scope: {} node(s) in {} province(s)",
        ctx.tree.node_count(),
        ctx.tree.nodes().len()
    );
    Ok(())
}

/// Resolve names to the most specific code.
pub fn run_resolve(ctx: &CliContext, province: &str, city: &str, district: &str) -> Result<()> {
    let resolution = region::resolve(ctx.tree.nodes(), province, city, district);
    println!("{}", resolution.code);
    if let Some(miss) = resolution.miss {
        eprintln!(
            "region-scope: no {} named '{}'; showing nearest ancestor",
            miss.level, miss.name
        );
    }
    Ok(())
}

/// Print the label for a code.
pub fn run_label(ctx: &CliContext, code: RegionCode) -> Result<()> {
    let label = ctx.tree.label_of(code);
    if label.is_empty() {
        eprintln!("region-scope: no region with code {}", code);
        std::process::exit(1);
    }
    println!("{label}");
    Ok(())
}
