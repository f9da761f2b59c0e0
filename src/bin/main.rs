//! node-convert - 场景转换命令行工具
//!
//! 用法：`node-convert <scene.json> [--config cfg.json] [--json]`
//!
//! 默认打印节点树概要；`--json` 输出转换后的完整 JSON。
//! 日志级别由 `RUST_LOG` 控制。

use magic_nodes::parser::scene::parse_scene;
use magic_nodes::{ConverterConfig, NodeConverter, SceneNode};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,magic_nodes=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}

struct Args {
    scene: PathBuf,
    config: Option<PathBuf>,
    json: bool,
}

const USAGE: &str = "usage: node-convert <scene.json> [--config cfg.json] [--json]";

fn parse_args() -> Result<Args, String> {
    let mut scene = None;
    let mut config = None;
    let mut json = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--config" => {
                let path = args.next().ok_or("--config needs a file path")?;
                config = Some(PathBuf::from(path));
            }
            "-h" | "--help" => return Err(USAGE.to_string()),
            other if other.starts_with("--") => return Err(format!("unknown option {}", other)),
            other => {
                if scene.replace(PathBuf::from(other)).is_some() {
                    return Err("only one scene file may be given".to_string());
                }
            }
        }
    }

    let scene = scene.ok_or_else(|| USAGE.to_string())?;
    Ok(Args { scene, config, json })
}

fn print_tree(roots: &[SceneNode]) {
    for root in roots {
        root.walk(&mut |node, depth| {
            let name = node.node.transform().name.as_deref().unwrap_or("-");
            println!("{}{} ({})", "  ".repeat(depth), node.node.kind(), name);
        });
    }
}

fn run(args: Args) -> magic_nodes::Result<()> {
    let config = match &args.config {
        Some(path) => ConverterConfig::load(path)?,
        None => ConverterConfig::default(),
    };
    let converter = NodeConverter::new(config);

    let content = std::fs::read_to_string(&args.scene)?;
    let roots = parse_scene(&converter, &content)?;
    info!(
        scene = %args.scene.display(),
        nodes = roots.iter().map(SceneNode::count).sum::<usize>(),
        "scene loaded"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&roots)?);
    } else {
        print_tree(&roots);
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
