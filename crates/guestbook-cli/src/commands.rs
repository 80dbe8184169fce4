use std::path::PathBuf;
use std::sync::Arc;

use eyre::{Result, WrapErr};
use guestbook_core::{Connectivity, Wish};
use guestbook_remote::HttpRemote;
use guestbook_sync::config::{default_config_path, load_or_default, save_config};
use guestbook_sync::{GuestbookConfig, GuestbookView, LoadSource, Submission, Synchronizer, ViewTimings};

/// Command line values that win over the config file.
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub endpoint: Option<String>,
    pub cache: Option<PathBuf>,
}

impl Overrides {
    fn config_path(&self) -> Result<PathBuf> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => Ok(default_config_path()?),
        }
    }

    fn resolve(&self) -> Result<GuestbookConfig> {
        let path = self.config_path()?;
        let mut config = load_or_default(&path)
            .wrap_err_with(|| format!("loading config from {}", path.display()))?;
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(cache) = &self.cache {
            config.cache_path = Some(cache.clone());
        }
        Ok(config)
    }
}

fn synchronizer(config: &GuestbookConfig) -> Result<Synchronizer<HttpRemote>> {
    let remote = config.http_remote()?;
    Ok(Synchronizer::from_config(remote, config)?)
}

fn print_wish(wish: &Wish) {
    let date = if wish.date.is_empty() { "-" } else { wish.date.as_str() };
    println!("[{}] {} ({date})", wish.id, wish.name);
    println!("    {}", wish.message);
}

fn source_label(source: LoadSource) -> &'static str {
    match source {
        LoadSource::Remote => "remote",
        LoadSource::Cache => "local cache",
        LoadSource::Defaults => "built-in defaults",
    }
}

pub async fn list(overrides: &Overrides) -> Result<()> {
    let config = overrides.resolve()?;
    let sync = synchronizer(&config)?;

    let report = sync.load().await;
    let snapshot = sync.snapshot().await;

    println!(
        "{} wishes from {} ({})",
        report.count,
        source_label(report.source),
        snapshot.connectivity
    );
    for wish in &snapshot.wishes {
        print_wish(wish);
    }
    Ok(())
}

pub async fn sign(overrides: &Overrides, name: &str, message: &str) -> Result<()> {
    let config = overrides.resolve()?;
    let sync = synchronizer(&config)?;

    // Start from the cache so an unconfirmed wish is saved alongside it.
    sync.hydrate().await;
    let submission = sync.submit(name, message).await?;

    match &submission {
        Submission::Confirmed { wish, .. } => {
            println!("Wish saved (id {}).", wish.id);
        }
        Submission::UnconfirmedCached { wish } => {
            println!(
                "Endpoint unreachable; wish kept locally as {} in {}.",
                wish.id,
                sync.cache().path().display()
            );
        }
        Submission::Pending { .. } => {
            eyre::bail!("submission did not settle");
        }
    }
    Ok(())
}

pub async fn ping(overrides: &Overrides) -> Result<()> {
    let config = overrides.resolve()?;
    let sync = synchronizer(&config)?;

    if sync.ping().await {
        println!("{} is {}", config.endpoint, Connectivity::Online);
        Ok(())
    } else {
        eyre::bail!("{} is {}", config.endpoint, Connectivity::Offline)
    }
}

pub async fn watch(overrides: &Overrides) -> Result<()> {
    let config = overrides.resolve()?;
    let sync = Arc::new(synchronizer(&config)?);
    let view = GuestbookView::open(sync, ViewTimings::from(&config)).await;

    let mut snapshots = view.subscribe();
    let mut featured = view.subscribe_featured();

    let snapshot = view.snapshot().await;
    println!("{} wishes ({})", snapshot.wishes.len(), snapshot.connectivity);
    if let Some(wish) = view.featured().await {
        print_wish(&wish);
    }

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                println!("{} wishes ({})", snapshot.wishes.len(), snapshot.connectivity);
            }
            changed = featured.changed() => {
                if changed.is_err() {
                    break;
                }
                featured.borrow_and_update();
                if let Some(wish) = view.featured().await {
                    print_wish(&wish);
                }
            }
        }
    }

    view.close();
    Ok(())
}

pub fn config_show(overrides: &Overrides) -> Result<()> {
    let config = overrides.resolve()?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    println!("cache: {}", config.resolved_cache_path()?.display());
    Ok(())
}

pub fn config_init(overrides: &Overrides) -> Result<()> {
    let path = overrides.config_path()?;
    let config = overrides.resolve()?;
    config.validate()?;
    save_config(&path, &config)?;
    println!("Wrote {}", path.display());
    Ok(())
}
