use anyhow::Result;
use clap::{Parser, Subcommand};
use minigit::areas::repository::Repository;

#[derive(Parser)]
#[command(
    name = "minigit",
    version = "0.1.0",
    about = "A minimal version-control engine",
    long_about = "A minimal version-control engine: snapshots a directory tree into a \
    content-addressable object store, links snapshots into a commit history, and moves \
    the working directory between snapshots by name or identifier.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(name = "init", about = "Initialize a new repository")]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(name = "hash-object", about = "Hash a file and store it as a blob")]
    HashObject {
        #[arg(index = 1, help = "The file to hash")]
        file: String,
    },
    #[command(name = "cat-file", about = "Print the raw content of an object")]
    CatFile {
        #[arg(index = 1, help = "The object to print (name or id)")]
        object: String,
    },
    #[command(name = "write-tree", about = "Snapshot the working directory as a tree")]
    WriteTree,
    #[command(name = "read-tree", about = "Replace the working directory with a tree")]
    ReadTree {
        #[arg(index = 1, help = "The tree to materialize (name or id)")]
        tree: String,
    },
    #[command(name = "commit", about = "Create a new commit with the specified message")]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "log", about = "Show commit history")]
    Log {
        #[arg(index = 1, help = "Revision to start from (defaults to HEAD)")]
        revision: Option<String>,
    },
    #[command(name = "checkout", about = "Move the working directory to a snapshot")]
    Checkout {
        #[arg(index = 1, help = "Branch, tag, or commit id to check out")]
        target: String,
    },
    #[command(name = "branch", about = "Create or list branches")]
    Branch {
        #[arg(index = 1, help = "The branch name to create")]
        name: Option<String>,
        #[arg(index = 2, help = "Start point (defaults to HEAD)")]
        start_point: Option<String>,
    },
    #[command(name = "tag", about = "Name a commit")]
    Tag {
        #[arg(index = 1, help = "The tag name")]
        name: String,
        #[arg(index = 2, help = "Commit to tag (defaults to HEAD)")]
        target: Option<String>,
    },
    #[command(name = "status", about = "Show the current checkout position")]
    Status,
}

fn open_repository(path: Option<&str>) -> Result<Repository> {
    match path {
        Some(path) => Repository::new(path, Box::new(std::io::stdout())),
        None => {
            let pwd = std::env::current_dir()?;
            Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => open_repository(path.as_deref())?.init(),
        Commands::HashObject { file } => open_repository(None)?.hash_object(file),
        Commands::CatFile { object } => open_repository(None)?.cat_file(object),
        Commands::WriteTree => open_repository(None)?.write_tree(),
        Commands::ReadTree { tree } => open_repository(None)?.read_tree(tree),
        Commands::Commit { message } => open_repository(None)?.commit(message),
        Commands::Log { revision } => open_repository(None)?.log(revision.as_deref()),
        Commands::Checkout { target } => open_repository(None)?.checkout(target),
        Commands::Branch { name, start_point } => {
            let repository = open_repository(None)?;
            match name {
                Some(name) => repository.branch(name, start_point.as_deref()),
                None => repository.list_branches(),
            }
        }
        Commands::Tag { name, target } => open_repository(None)?.tag(name, target.as_deref()),
        Commands::Status => open_repository(None)?.status(),
    }
}
