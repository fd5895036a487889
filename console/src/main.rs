//! Console dashboard for the portfolio API.
//!
//! One subcommand per resource kind, each with list/create/edit/delete
//! actions. Form input arrives as repeatable `--field name=value` flags
//! (list fields take comma-separated values); deletes prompt for
//! confirmation unless `--yes` is passed. `--offline` swaps the REST
//! backend for the SDK's in-memory one.

use clap::{Args, Parser, Subcommand};
use folio_admin::{
    render_table, About, AlwaysConfirm, AppError, Backend, Blog, ClientConfig, ConfirmDelete,
    Education, FormValue, ListCache, MemoryBackend, MemoryNotifier, Project, ProjectCredential,
    ProjectFeature, Registry, Resource, ResourceDescriptor, ResourcePage, RestBackend, Skill,
    SkillCategory, SubmitError, ToastLevel,
};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "folio-console", version, about = "Manage portfolio content over the REST API")]
struct Cli {
    /// Run against an in-memory backend instead of the REST API.
    #[arg(long, global = true)]
    offline: bool,
    #[command(subcommand)]
    resource: ResourceCommand,
}

#[derive(Subcommand)]
enum ResourceCommand {
    /// Biographical about records.
    About(ResourceArgs),
    /// Blog posts.
    Blog(ResourceArgs),
    /// Education records.
    Education(ResourceArgs),
    /// Projects.
    Project(ResourceArgs),
    /// Project features.
    ProjectFeature(ResourceArgs),
    /// Project demo credentials.
    ProjectCredential(ResourceArgs),
    /// Skills.
    Skill(ResourceArgs),
    /// Skill categories.
    SkillCategory(ResourceArgs),
}

#[derive(Args)]
struct ResourceArgs {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Fetch and print the list.
    List {
        /// Narrow the list by field=value (repeatable).
        #[arg(long = "filter", value_parser = parse_pair)]
        filters: Vec<(String, String)>,
    },
    /// Create a record from --field values.
    Create {
        #[arg(long = "field", value_parser = parse_pair)]
        fields: Vec<(String, String)>,
    },
    /// Update the selected record's --field values.
    Edit {
        id: Uuid,
        #[arg(long = "field", value_parser = parse_pair)]
        fields: Vec<(String, String)>,
    },
    /// Delete a record after confirmation.
    Delete {
        id: Uuid,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected name=value, got '{raw}'")),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("folio_admin=info")),
        )
        .init();

    let cli = Cli::parse();
    let registry = Registry::portfolio();
    registry.validate()?;

    let backend: Arc<dyn Backend> = if cli.offline {
        tracing::info!("running against the in-memory backend");
        Arc::new(MemoryBackend::new())
    } else {
        let config = ClientConfig::from_env();
        tracing::info!(base_url = %config.base_url, "running against the REST API");
        Arc::new(RestBackend::new(&config)?)
    };
    let cache = Arc::new(ListCache::new());
    let notifier = Arc::new(MemoryNotifier::new());

    let result = match cli.resource {
        ResourceCommand::About(args) => {
            run::<About>(args, &registry, backend, cache, notifier.clone()).await
        }
        ResourceCommand::Blog(args) => {
            run::<Blog>(args, &registry, backend, cache, notifier.clone()).await
        }
        ResourceCommand::Education(args) => {
            run::<Education>(args, &registry, backend, cache, notifier.clone()).await
        }
        ResourceCommand::Project(args) => {
            run::<Project>(args, &registry, backend, cache, notifier.clone()).await
        }
        ResourceCommand::ProjectFeature(args) => {
            run::<ProjectFeature>(args, &registry, backend, cache, notifier.clone()).await
        }
        ResourceCommand::ProjectCredential(args) => {
            run::<ProjectCredential>(args, &registry, backend, cache, notifier.clone()).await
        }
        ResourceCommand::Skill(args) => {
            run::<Skill>(args, &registry, backend, cache, notifier.clone()).await
        }
        ResourceCommand::SkillCategory(args) => {
            run::<SkillCategory>(args, &registry, backend, cache, notifier.clone()).await
        }
    };

    for toast in notifier.drain() {
        match toast.level {
            ToastLevel::Success => println!("ok: {}", toast.message),
            ToastLevel::Error => eprintln!("error: {}", toast.message),
        }
    }
    result
}

async fn run<R: Resource>(
    args: ResourceArgs,
    registry: &Registry,
    backend: Arc<dyn Backend>,
    cache: Arc<ListCache>,
    notifier: Arc<MemoryNotifier>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut page = ResourcePage::<R>::new(registry, backend, cache, notifier)?;
    match args.action {
        Action::List { filters } => {
            for (field, value) in filters {
                page = page.scoped(field, value);
            }
            page.load().await?;
            print!("{}", render_table(page.descriptor(), page.rows())?);
        }
        Action::Create { fields } => {
            page.open_create();
            apply_fields(&mut page, &fields)?;
            submit(&mut page).await?;
        }
        Action::Edit { id, fields } => {
            page.load().await?;
            page.open_edit(id)?;
            apply_fields(&mut page, &fields)?;
            submit(&mut page).await?;
        }
        Action::Delete { id, yes } => {
            let confirm: &dyn ConfirmDelete = if yes { &AlwaysConfirm } else { &StdinConfirm };
            if !page.delete(id, confirm).await? {
                println!("delete cancelled");
            }
        }
    }
    Ok(())
}

fn apply_fields<R: Resource>(
    page: &mut ResourcePage<R>,
    fields: &[(String, String)],
) -> Result<(), AppError> {
    for (name, raw) in fields {
        let is_list = page
            .descriptor()
            .field(name)
            .map(|f| f.is_list())
            .unwrap_or(false);
        let value = if is_list {
            FormValue::List(
                raw.split(',')
                    .map(|item| item.trim().to_string())
                    .filter(|item| !item.is_empty())
                    .collect(),
            )
        } else {
            FormValue::Text(raw.clone())
        };
        let form = page
            .form_mut()
            .ok_or_else(|| AppError::Validation("no form open".to_string()))?;
        form.set(name, value)?;
    }
    Ok(())
}

async fn submit<R: Resource>(page: &mut ResourcePage<R>) -> Result<(), Box<dyn std::error::Error>> {
    match page.submit().await {
        Ok(()) => Ok(()),
        Err(SubmitError::Invalid(errors)) => {
            for error in errors.iter() {
                eprintln!("{}: {}", error.field, error.message);
            }
            Err("submission blocked by validation errors".into())
        }
        Err(other) => Err(other.into()),
    }
}

/// The console's `window.confirm`: a y/N prompt on stdin.
struct StdinConfirm;

impl ConfirmDelete for StdinConfirm {
    fn confirm(&self, descriptor: &ResourceDescriptor, _id: Uuid) -> bool {
        print!(
            "Are you sure you want to delete this {}? [y/N] ",
            descriptor.display_name()
        );
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes" | "Yes" | "YES")
    }
}
