//! storefront-desktop-ui: egui desktop storefront. Product grid with category
//! filter, free-text search, and price sort; cart summary panel toggled from
//! the header. Every interaction dispatches an InputEvent into the session.

use eframe::egui;
use storefront_core::{Category, InputEvent, SortOrder, StoreSession, CATEGORY_ALL};
use storefront_desktop_ui::{build_session, UiConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!(
            "[storefront-desktop-ui] .env not loaded: {} (using system environment)",
            e
        );
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (session, store_config) = build_session();
    let ui_config = UiConfig::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([ui_config.window_width, ui_config.window_height])
            .with_title(store_config.shop_name.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "Storefront",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(if ui_config.theme_dark {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            let mut session = session;
            // Render hook: any dispatched event schedules a repaint, so the
            // next frame paints the fresh snapshot.
            let repaint_ctx = cc.egui_ctx.clone();
            session.subscribe(move |_| repaint_ctx.request_repaint());
            Ok(Box::new(StorefrontApp::new(
                session,
                store_config.shop_name,
                ui_config,
            )))
        }),
    )
}

struct StorefrontApp {
    session: StoreSession,
    shop_name: String,
    config: UiConfig,
    /// Local edit buffer for the search field; synced into the session on change.
    search_input: String,
}

impl StorefrontApp {
    fn new(session: StoreSession, shop_name: String, config: UiConfig) -> Self {
        let search_input = session.selection().search_query().to_string();
        Self {
            session,
            shop_name,
            config,
            search_input,
        }
    }
}

/// Menu text for a category selection value.
fn category_display(value: &str) -> &str {
    if value == CATEGORY_ALL {
        "All Categories"
    } else {
        value
    }
}

impl eframe::App for StorefrontApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Paint from a frame-local copy; dispatches below take effect on the
        // next frame (the subscribed hook requests the repaint).
        let snapshot = self.session.view().clone();
        let selection = self.session.selection().clone();

        egui::TopBottomPanel::top("storefront_header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(&self.shop_name);
                ui.separator();
                let search = ui.add_sized(
                    [260.0, 24.0],
                    egui::TextEdit::singleline(&mut self.search_input)
                        .hint_text("Search products..."),
                );
                if search.changed() {
                    self.session
                        .dispatch(InputEvent::SearchChanged(self.search_input.clone()));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(format!("Cart ({})", snapshot.cart_count))
                        .clicked()
                    {
                        self.session.dispatch(InputEvent::CartToggled);
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mut category_choice = selection.selected_category().to_string();
                egui::ComboBox::from_id_salt(egui::Id::new("category_combo"))
                    .selected_text(category_display(&category_choice).to_string())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut category_choice,
                            CATEGORY_ALL.to_string(),
                            "All Categories",
                        );
                        for category in Category::all() {
                            ui.selectable_value(
                                &mut category_choice,
                                category.label().to_string(),
                                category.label(),
                            );
                        }
                    });
                if category_choice != selection.selected_category() {
                    self.session
                        .dispatch(InputEvent::CategorySelected(category_choice));
                }

                let mut order_choice = selection.sort_order();
                egui::ComboBox::from_id_salt(egui::Id::new("sort_combo"))
                    .selected_text(order_choice.label())
                    .show_ui(ui, |ui| {
                        for order in SortOrder::all() {
                            ui.selectable_value(&mut order_choice, order, order.label());
                        }
                    });
                if order_choice != selection.sort_order() {
                    self.session.dispatch(InputEvent::SortSelected(order_choice));
                }
            });

            if let Some(notice) = snapshot.notice.as_deref() {
                ui.add_space(4.0);
                ui.label(egui::RichText::new(notice).color(egui::Color32::YELLOW));
            }

            ui.add_space(8.0);
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                if snapshot.visible.is_empty() {
                    ui.add_space(12.0);
                    ui.label(egui::RichText::new("No products match the current filters.").weak());
                }
                ui.horizontal_wrapped(|ui| {
                    for product in &snapshot.visible {
                        ui.group(|ui| {
                            ui.set_width(self.config.card_width);
                            ui.vertical(|ui| {
                                ui.strong(&product.name);
                                ui.label(egui::RichText::new(product.category.label()).small());
                                ui.label(snapshot.price_label(product.price));
                                ui.hyperlink_to("image", &product.image);
                                if ui.button("Add to Cart").clicked() {
                                    self.session.dispatch(InputEvent::AddToCart(product.id));
                                }
                            });
                        });
                    }
                });
            });
        });

        if snapshot.cart_panel_open {
            egui::Window::new("Your Cart")
                .anchor(egui::Align2::RIGHT_TOP, [-12.0, 40.0])
                .resizable(false)
                .collapsible(false)
                .show(ctx, |ui| {
                    if snapshot.cart_entries.is_empty() {
                        ui.label("Your cart is empty");
                    } else {
                        for product in &snapshot.cart_entries {
                            ui.horizontal(|ui| {
                                ui.label(&product.name);
                                ui.label(snapshot.price_label(product.price));
                                if ui.button("Remove").clicked() {
                                    self.session
                                        .dispatch(InputEvent::RemoveFromCart(product.id));
                                }
                            });
                        }
                        ui.separator();
                        ui.strong(snapshot.total_label());
                    }
                });
        }
    }
}
