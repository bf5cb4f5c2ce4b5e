mod cli;
mod sites;

use std::time::Instant;

use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

use webchrome::controller::PROGRESS_FADE_DELAY;
use webchrome::headless::{HeadlessShell, HeadlessSurface};
use webchrome::{
    BrowserController, ChromeConfig, ChromeShell, NavigableSurface, NavigationRequest,
    SurfaceEvent, ToolbarItem,
};
use webchrome_common::{Color, LoadError};

/// Delegate that logs every hook.
struct LogDelegate;

impl webchrome::BrowserDelegate for LogDelegate {
    fn on_start_loading(&mut self, url: Option<&Url>) {
        info!(url = ?url.map(Url::as_str), "start loading");
    }

    fn on_finish_loading(&mut self, url: Option<&Url>) {
        info!(url = ?url.map(Url::as_str), "finish loading");
    }

    fn on_fail_loading(&mut self, url: Option<&Url>, error: &LoadError) {
        info!(url = ?url.map(Url::as_str), %error, "failed to load");
    }

    fn on_will_dismiss(&mut self) {
        info!("browser will dismiss");
    }

    fn on_did_dismiss(&mut self) {
        info!("browser did dismiss");
    }
}

fn describe(item: &ToolbarItem) -> String {
    match item {
        ToolbarItem::Back { enabled } => format!("[< back {}]", on_off(*enabled)),
        ToolbarItem::Forward { enabled } => format!("[> fwd {}]", on_off(*enabled)),
        ToolbarItem::Stop => "[x stop]".into(),
        ToolbarItem::Refresh => "[@ refresh]".into(),
        ToolbarItem::Share => "[^ share]".into(),
        ToolbarItem::FixedSpace { width } => format!("[{width}pt]"),
        ToolbarItem::FlexibleSpace => "[~]".into(),
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

fn print_chrome(shell: &HeadlessShell) {
    let items: Vec<String> = shell.toolbar_items.iter().map(describe).collect();
    println!("  title:   {}", shell.title.as_deref().unwrap_or("-"));
    println!("  toolbar: {}", items.join(" "));
    println!(
        "  progress: {:.1} (alpha {:.0})",
        shell.progress, shell.progress_alpha
    );
}

fn main() -> webchrome_common::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = cli::parse();

    if args.list {
        for (index, (title, url)) in sites::SITES.iter().enumerate() {
            println!("{index:2}  {title}  {url}");
        }
        return Ok(());
    }

    let (title, url) = match &args.url {
        Some(url) => ("(custom)", url.as_str()),
        None => {
            let (title, url) = sites::SITES[args.site % sites::SITES.len()];
            (title, url)
        }
    };

    let mut config = ChromeConfig {
        language: args.language.into(),
        toolbar_hidden: args.toolbar_hidden,
        ..ChromeConfig::default()
    };
    if let Some(tint) = args.tint.as_deref().and_then(Color::from_hex) {
        config.tint_color = tint;
    }

    let mut controller =
        BrowserController::with_config(HeadlessSurface::new(), HeadlessShell::new(), config);
    controller.set_delegate(Box::new(LogDelegate));
    controller.attach();
    controller.present();

    println!("loading {url}");
    controller.load_url_str(url)?;
    let loaded = controller.surface().current_url();
    controller.handle_event(SurfaceEvent::LoadStarted { url: loaded.clone() });
    println!("while loading:");
    print_chrome(controller.shell());

    for value in [0.2, 0.6, 1.0] {
        controller.surface_mut().set_progress(value);
        controller.handle_event(SurfaceEvent::ProgressChanged { value });
    }
    controller.surface_mut().finish_load(title);
    controller.handle_event(SurfaceEvent::LoadFinished { url: loaded });
    controller.tick(Instant::now() + PROGRESS_FADE_DELAY);

    println!("after loading:");
    print_chrome(controller.shell());

    // A non-web scheme goes through the external-handler policy; with no
    // handler installed the navigation is simply dropped.
    let request = NavigationRequest::new(Url::parse("mailto:hello@example.com").expect("static url"));
    let policy = controller.decide_navigation_policy(&request);
    println!("mailto policy: {policy:?}");

    controller.dismiss();
    println!("after dismiss:");
    println!(
        "  toolbar hidden: {}",
        controller.shell().is_toolbar_hidden()
    );

    Ok(())
}
