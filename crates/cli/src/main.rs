mod cmd;
mod output;
mod prompts;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tfstate_lib::config;
use tracing_subscriber::EnvFilter;

use cmd::{cmd_delete, cmd_export, cmd_find, cmd_list, cmd_modify, cmd_move, cmd_show, cmd_validate};
use output::{ListFormat, OutputFormat, print_error};

/// tfstate - inspect and edit infrastructure state files
#[derive(Parser)]
#[command(name = "tfstate")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:
  tfstate list terraform.tfstate --type aws_instance
  tfstate export terraform.tfstate aws_instance.web output.json
  tfstate modify terraform.tfstate aws_instance.web tags.env prod
  tfstate move terraform.tfstate aws_instance.old aws_instance.new
  tfstate delete terraform.tfstate aws_instance.unused")]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// List resources in a state file
  List {
    /// Path to the state file
    state: PathBuf,

    /// Only resources of this type
    #[arg(long = "type")]
    resource_type: Option<String>,

    /// Only addresses matching this pattern (supports * ? [...])
    #[arg(long)]
    name: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "tree")]
    format: ListFormat,
  },

  /// Print a resource as JSON
  Show {
    /// Path to the state file
    state: PathBuf,

    /// Resource address (e.g. aws_instance.web)
    address: String,

    /// Dotted attribute path inside the resource (e.g. instances.0.attributes.tags)
    #[arg(short, long)]
    path: Option<String>,
  },

  /// Export a resource to a JSON file
  Export {
    /// Path to the state file
    state: PathBuf,

    /// Resource address (e.g. aws_instance.web)
    address: String,

    /// Output JSON file
    output: PathBuf,

    /// Overwrite an existing output file without asking
    #[arg(long)]
    force: bool,
  },

  /// Modify a resource attribute
  Modify {
    /// Path to the state file
    state: PathBuf,

    /// Resource address (e.g. aws_instance.web)
    address: String,

    /// Dotted attribute path (e.g. instances.0.attributes.tags.Environment)
    attribute: String,

    /// New value; JSON literals are parsed, anything else is a string
    #[arg(allow_hyphen_values = true)]
    value: String,

    /// Skip confirmation prompt
    #[arg(long)]
    force: bool,

    /// Do not back up the state file first
    #[arg(long)]
    no_backup: bool,
  },

  /// Move (rename) a resource
  Move {
    /// Path to the state file
    state: PathBuf,

    /// Current resource address
    old_address: String,

    /// New resource address
    new_address: String,

    /// Skip confirmation prompt
    #[arg(long)]
    force: bool,

    /// Do not back up the state file first
    #[arg(long)]
    no_backup: bool,
  },

  /// Delete a resource from the state file
  Delete {
    /// Path to the state file
    state: PathBuf,

    /// Resource address to delete
    address: String,

    /// Skip confirmation prompt
    #[arg(long)]
    force: bool,

    /// Do not back up the state file first
    #[arg(long)]
    no_backup: bool,
  },

  /// Check the structure of a state file
  Validate {
    /// Path to the state file
    state: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
  },

  /// Find state files in a directory tree
  Find {
    /// Directory to search
    #[arg(default_value = ".")]
    directory: PathBuf,
  },
}

fn init_logging(verbose: bool) {
  let filter = if verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::try_new(config::log_filter()).unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER))
  };

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  let result = match cli.command {
    Commands::List {
      state,
      resource_type,
      name,
      format,
    } => cmd_list(&state, resource_type.as_deref(), name.as_deref(), format),
    Commands::Show { state, address, path } => cmd_show(&state, &address, path.as_deref()),
    Commands::Export {
      state,
      address,
      output,
      force,
    } => cmd_export(&state, &address, &output, force),
    Commands::Modify {
      state,
      address,
      attribute,
      value,
      force,
      no_backup,
    } => cmd_modify(&state, &address, &attribute, &value, force, no_backup),
    Commands::Move {
      state,
      old_address,
      new_address,
      force,
      no_backup,
    } => cmd_move(&state, &old_address, &new_address, force, no_backup),
    Commands::Delete {
      state,
      address,
      force,
      no_backup,
    } => cmd_delete(&state, &address, force, no_backup),
    Commands::Validate { state, format } => cmd_validate(&state, format),
    Commands::Find { directory } => cmd_find(&directory),
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}
