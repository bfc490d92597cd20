use clap::Parser;
use std::fs;
use std::path::PathBuf;
use swagger_to_flow::source::{FetchOptions, SchemaSource};
use swagger_to_flow::{NamingPolicy, PropertyTransform, convert_schema_with_naming};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

#[derive(Parser)]
#[command(name = "swagger-to-flow", version)]
#[command(about = "Convert swagger definitions to Flow type aliases", long_about = None)]
struct Cli {
    /// Path or URL of the swagger json file (use '-' for stdin)
    #[arg(short, long, value_name = "PATH")]
    path: String,

    /// Transforms a property name
    #[arg(short, long, value_enum, default_value_t = PropertyTransform::Normal)]
    transform_property: PropertyTransform,

    /// Convert definition names to PascalCase type names
    #[arg(short, long)]
    change_type_case: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Accept invalid TLS certificates when fetching a URL
    #[arg(short = 'k', long)]
    insecure: bool,

    /// Log debug information to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // --verbose wins over RUST_LOG for this crate
    if verbose {
        if let Ok(directive) = "swagger_to_flow=debug".parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Read input
    let source = SchemaSource::from_arg(&cli.path);
    let input_content = source.read(FetchOptions {
        insecure: cli.insecure,
    })?;

    // Convert schema
    let naming = NamingPolicy::new(cli.transform_property, cli.change_type_case);
    let flow_types = convert_schema_with_naming(&input_content, naming)?;

    // Write output
    if let Some(output_path) = cli.output {
        fs::write(output_path, flow_types + "\n")?;
    } else {
        println!("{}", flow_types);
    }

    Ok(())
}
