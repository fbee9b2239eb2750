use iced::keyboard::{self, key::Named, Key};
use iced::widget::image::Handle;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{button, column, container, opaque, row, scrollable, text, Column, Stack};
use iced::{window, Alignment, Element, Length, Size, Subscription, Task, Theme};
use clap::Parser;
use rfd::FileDialog;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod site;
mod state;
mod ui;

use config::{Cli, ViewerConfig, WINDOW_HEIGHT, WINDOW_WIDTH};
use site::resize::Thumbnail;
use site::Site;
use state::data::EntryId;
use state::lightbox::NavKey;
use state::page::{Effect, Page, PageEvent};
use state::swap::SwapToken;
use state::viewport::Viewport;
use ui::ImageStore;

/// Main application state
struct PortfolioViewer {
    config: ViewerConfig,
    /// Entries, lightbox and drawer
    page: Page,
    site: Option<Site>,
    images: ImageStore,
    /// Bumped by every site load request; only the latest may land
    load_request: u64,
    /// Bumped whenever the page is replaced. Thumbnail and image loads
    /// carry the generation they were issued under.
    generation: u64,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the "Open Site" button
    OpenSite,
    SiteLoaded(u64, Result<Site, String>),
    ThumbnailsReady(u64, EntryId, Result<Vec<(usize, Thumbnail)>, String>),
    Page(PageEvent),
    /// Sources for a carousel swap finished loading
    SwapLoaded(u64, EntryId, SwapToken, Vec<(String, Handle)>),
}

impl PortfolioViewer {
    fn new(config: ViewerConfig) -> (Self, Task<Message>) {
        let viewport = Viewport::new(WINDOW_WIDTH, config.breakpoint);
        let page = Page::new(Vec::new(), viewport, config.swipe_threshold);

        let mut viewer = PortfolioViewer {
            page,
            site: None,
            images: ImageStore::default(),
            load_request: 0,
            generation: 0,
            status: "Open a site folder to preview its portfolio.".to_string(),
            config,
        };

        let task = match viewer.config.site.clone() {
            Some(root) => viewer.load(root),
            None => Task::none(),
        };

        info!("🎨 Portfolio viewer initialized");
        (viewer, task)
    }

    fn title(&self) -> String {
        match &self.site {
            Some(site) => format!("Portfolio - {}", site.root.display()),
            None => "Portfolio".to_string(),
        }
    }

    fn load(&mut self, root: PathBuf) -> Task<Message> {
        self.status = format!("Loading {}...", root.display());
        self.load_request += 1;
        let request = self.load_request;
        Task::perform(site::load_site(root), move |result| {
            Message::SiteLoaded(request, result.map_err(|e| e.to_string()))
        })
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenSite => {
                let folder = FileDialog::new()
                    .set_title("Select Site Folder")
                    .pick_folder();

                match folder {
                    Some(root) => self.load(root),
                    None => Task::none(),
                }
            }
            Message::SiteLoaded(request, _) if request != self.load_request => {
                debug!(request, "discarding superseded site load");
                Task::none()
            }
            Message::SiteLoaded(_, Ok(loaded)) => {
                self.generation += 1;
                let generation = self.generation;
                let viewport = Viewport::new(self.page.viewport().width(), self.config.breakpoint);
                self.page = Page::from_markup(
                    loaded.entries.clone(),
                    viewport,
                    self.config.swipe_threshold,
                    Some(self.config.thumbnail_width as f32),
                );
                self.images = ImageStore::new(loaded.root.clone());
                self.status = format!(
                    "✅ {} entries, loaded {}",
                    loaded.entries.len(),
                    loaded.loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
                );

                let width = self.config.thumbnail_width;
                let thumbnails = self
                    .page
                    .entries()
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.filmstrip().is_some())
                    .map(|(i, entry)| {
                        let id = EntryId(i);
                        Task::perform(
                            site::build_thumbnails(loaded.root.clone(), entry.images().to_vec(), width),
                            move |result| {
                                Message::ThumbnailsReady(
                                    generation,
                                    id,
                                    result.map_err(|e| e.to_string()),
                                )
                            },
                        )
                    })
                    .collect::<Vec<_>>();

                self.site = Some(loaded);
                Task::batch(thumbnails)
            }
            Message::SiteLoaded(_, Err(e)) => {
                error!("Failed to load site: {}", e);
                self.status = format!("⚠️  {}", e);
                Task::none()
            }
            Message::ThumbnailsReady(generation, ..) | Message::SwapLoaded(generation, ..)
                if generation != self.generation =>
            {
                debug!(generation, "discarding result from a replaced site");
                Task::none()
            }
            Message::ThumbnailsReady(_, id, Ok(thumbnails)) => {
                debug!(entry = id.0, count = thumbnails.len(), "thumbnails ready");
                for (index, thumb) in thumbnails {
                    self.images.insert_thumbnail(id, index, thumb);
                }
                Task::none()
            }
            Message::ThumbnailsReady(_, id, Err(e)) => {
                warn!("Thumbnails for entry {} failed: {}", id.0, e);
                Task::none()
            }
            Message::Page(event) => {
                let effects = self.page.handle(event);
                Task::batch(effects.into_iter().map(|effect| self.run(effect)))
            }
            Message::SwapLoaded(_, id, token, loaded) => {
                for (src, handle) in loaded {
                    self.images.insert(src, handle);
                }
                if !self.page.settle(id, token) {
                    debug!(entry = id.0, "discarding stale image swap");
                }
                Task::none()
            }
        }
    }

    fn run(&self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::Swap {
                entry,
                token,
                sources,
            } => {
                let pending: Vec<String> = sources
                    .into_iter()
                    .filter(|src| !self.images.is_loaded(src))
                    .collect();

                let generation = self.generation;
                match self.images.root() {
                    Some(root) if !pending.is_empty() => Task::perform(
                        load_sources(root.to_path_buf(), pending),
                        move |loaded| Message::SwapLoaded(generation, entry, token, loaded),
                    ),
                    _ => Task::done(Message::SwapLoaded(generation, entry, token, Vec::new())),
                }
            }
            Effect::ScrollFilmstrip { entry, delta } => scrollable::scroll_by(
                ui::entry::filmstrip_id(entry),
                AbsoluteOffset { x: delta, y: 0.0 },
            ),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let viewport = self.page.viewport();

        let entries: Element<PageEvent> = if self.page.entries().is_empty() {
            container(text("No portfolio entries yet.").size(16))
                .center(Length::Fill)
                .into()
        } else {
            scrollable(Column::with_children(
                self.page.entries().iter().enumerate().map(|(i, entry)| {
                    ui::entry::view(EntryId(i), entry, viewport, &self.images)
                }),
            ))
            .height(Length::Fill)
            .into()
        };

        let title = self
            .site
            .as_ref()
            .and_then(|site| site.root.file_name())
            .and_then(|name| name.to_str())
            .unwrap_or("Portfolio");

        let mut layers: Vec<Element<PageEvent>> =
            vec![column![ui::nav::header(&self.page, title), entries].into()];

        // Overlays swallow input so the page underneath cannot scroll
        if self.page.scroll_locked() {
            if let Some(drawer) = ui::nav::drawer(&self.page) {
                layers.push(opaque(drawer));
            }
            if let Some(lightbox) =
                ui::lightbox::view(self.page.lightbox(), viewport, &self.images)
            {
                layers.push(opaque(lightbox));
            }
        }

        let page: Element<PageEvent> = Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        let status_bar = row![
            button("Open Site").on_press(Message::OpenSite).padding(8),
            text(&self.status).size(14),
        ]
        .spacing(16)
        .padding(8)
        .align_y(Alignment::Center);

        column![page.map(Message::Page), status_bar].into()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            window::resize_events()
                .map(|(_id, size)| Message::Page(PageEvent::Resized(size.width))),
            keyboard::on_key_press(key_message),
        ])
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn key_message(key: Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    let key = match key.as_ref() {
        Key::Named(Named::Escape) => NavKey::Escape,
        Key::Named(Named::ArrowLeft) => NavKey::ArrowLeft,
        Key::Named(Named::ArrowRight) => NavKey::ArrowRight,
        _ => return None,
    };
    Some(Message::Page(PageEvent::Key(key)))
}

/// Read carousel sources from disk, dropping any that fail
async fn load_sources(root: PathBuf, sources: Vec<String>) -> Vec<(String, Handle)> {
    let mut loaded = Vec::with_capacity(sources.len());
    for src in sources {
        let path = site::metadata::resolve(&root, &src);
        match tokio::fs::read(&path).await {
            Ok(bytes) => loaded.push((src, Handle::from_bytes(bytes))),
            Err(e) => warn!("Could not load {}: {}", path.display(), e),
        }
    }
    loaded
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Some(image) = &cli.describe {
        let root = cli.site.clone().unwrap_or_else(|| PathBuf::from("."));
        println!("{}", site::metadata::image_description(&root, image));
        return Ok(());
    }

    let config = ViewerConfig::from(&cli);

    iced::application(
        PortfolioViewer::title,
        PortfolioViewer::update,
        PortfolioViewer::view,
    )
    .theme(PortfolioViewer::theme)
    .subscription(PortfolioViewer::subscription)
    .window_size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
    .centered()
    .run_with(move || PortfolioViewer::new(config))
}
