pub mod inspect;
pub mod login;
pub mod scope;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::ConsoleConfig;
use crate::error::Result;
use crate::region::{RegionNode, RegionTree};

/// Config and full tree shared by every subcommand.
pub struct CliContext {
    pub config: ConsoleConfig,
    pub tree: Arc<RegionTree>,
}

impl CliContext {
    /// Load config (explicit path, else `.region-scope/config.yml` under the
    /// working directory) and build the full tree from its dataset.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => ConsoleConfig::load_from(path)?,
            None => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                ConsoleConfig::load_project(&cwd)?
            }
        };
        let source = config.load_source()?;
        let tree = RegionTree::from_source(&source)?;
        tracing::debug!(
            "loaded {} region node(s), fingerprint {}",
            tree.node_count(),
            tree.fingerprint()
        );
        Ok(Self {
            config,
            tree: Arc::new(tree),
        })
    }
}

/// Print a forest as indented `code  label` lines, or as pretty JSON.
pub fn print_nodes(nodes: &[RegionNode], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(nodes)?);
    } else {
        let mut out = String::new();
        render_text(nodes, 0, &mut out);
        print!("{out}");
    }
    Ok(())
}

fn render_text(nodes: &[RegionNode], depth: usize, out: &mut String) {
    for node in nodes {
        out.push_str(&format!("{}{}  {}\n", "  ".repeat(depth), node.code, node.label));
        render_text(&node.children, depth + 1, out);
    }
}
