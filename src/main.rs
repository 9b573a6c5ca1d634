use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, canvas, column, container, image, row, stack, text};
use iced::{Alignment, Background, Element, Font, Gradient, Length, Radians, Task, Theme};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use loadout_editor::assets::{discover_base_dir, AssetLibrary};
use loadout_editor::fonts;
use loadout_editor::state::data::GameData;
use loadout_editor::state::equipment::{Equipment, ItemRef, SlotId, WeaponType};
use loadout_editor::style::{self, Rarity};
use loadout_editor::ui::slot::SlotCanvas;

/// Weapons cross container size (aspect ratio 1:1.1)
const WEAPONS_WIDTH: f32 = 400.0;
const WEAPONS_HEIGHT: f32 = WEAPONS_WIDTH * 1.1;

/// Support slot size (aspect ratio 159:82)
const SUPPORT_WIDTH: f32 = 159.0;
const SUPPORT_HEIGHT: f32 = 82.0;

/// Auxiliary slot size (aspect ratio 12:10)
const AUX_WIDTH: f32 = 120.0;
const AUX_HEIGHT: f32 = 100.0;

/// Main application state
struct LoadoutEditor {
    /// The nine equipment slots
    equipment: Equipment,
    /// Image resolution (index + probe + CDN fallback)
    library: AssetLibrary,
    /// Resolved icon handles for occupied slots
    icons: HashMap<SlotId, image::Handle>,
    /// Whether slots respond to clicks
    editable: bool,
    /// Metadata scraped by the extract-game-data script, when present
    game_data: Option<GameData>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked a slot
    SlotClicked(SlotId),
    /// User toggled edit mode
    EditModeToggled,
    /// Background game data load finished
    GameDataLoaded(Option<GameData>),
}

impl LoadoutEditor {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let library = AssetLibrary::discover();

        println!(
            "🎨 Loadout editor initialized with {} indexed images",
            library.index().len()
        );

        let status = format!("Ready. {} images indexed.", library.index().len());
        let data_path = library.base_dir().join("data").join("game_data.json");

        (
            LoadoutEditor {
                equipment: Equipment::new(),
                library,
                icons: HashMap::new(),
                editable: true,
                game_data: None,
                status,
            },
            Task::perform(load_game_data(data_path), Message::GameDataLoaded),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SlotClicked(slot) => {
                if self.editable {
                    if self.equipment.is_occupied(slot) {
                        self.equipment.clear(slot);
                        self.status = format!("Cleared {}", slot.as_str());
                    } else {
                        // TODO: open the item picker dialog instead of a fixed item
                        self.equipment.assign(slot, demo_item());
                        self.status = format!("Equipped {}", slot.as_str());
                    }
                    self.refresh_icon(slot);
                }
                Task::none()
            }
            Message::EditModeToggled => {
                self.editable = !self.editable;
                Task::none()
            }
            Message::GameDataLoaded(data) => {
                if let Some(ref data) = data {
                    self.status = format!(
                        "Ready. {} manufacturers, {} weapon types known.",
                        data.manufacturers.len(),
                        data.weapon_types.len()
                    );
                }
                self.game_data = data;
                Task::none()
            }
        }
    }

    /// Re-resolve a slot's icon after a state transition. Only local files
    /// that actually decode become icons; everything else shows the
    /// placeholder glyph.
    fn refresh_icon(&mut self, slot: SlotId) {
        self.icons.remove(&slot);
        if let Some(item) = self.equipment.get(slot) {
            let location = self.library.item_icon(slot.kind(), item);
            if let Some(handle) = load_icon(&location) {
                self.icons.insert(slot, handle);
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let edit_label = if self.editable {
            "Edit Mode: ON"
        } else {
            "Edit Mode: OFF"
        };

        let content = column![
            self.weapons_section(),
            self.support_section(),
            self.auxiliaries_section(),
            button(edit_label)
                .on_press(Message::EditModeToggled)
                .padding(10),
            text(&self.status).size(14).color(style::GREY_2),
            text(match &self.game_data {
                Some(data) => format!("Game data v{}", data.version),
                None => String::from("No game data loaded"),
            })
            .size(12)
            .color(style::GREY_3),
        ]
        .spacing(32)
        .padding(24)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .style(window_background)
            .into()
    }

    /// The four weapon slots in their cross arrangement: 1 left, 2 top,
    /// 3 right, 4 bottom, overlapping in a fixed-size stack.
    fn weapons_section(&self) -> Element<Message> {
        let side_w = WEAPONS_WIDTH * 0.53;
        let side_h = WEAPONS_HEIGHT * 0.56;
        let center_w = WEAPONS_WIDTH * 0.56;
        let center_h = WEAPONS_HEIGHT * 0.53;

        stack![
            self.placed_slot(SlotId::Weapon1, side_w, side_h, Horizontal::Left, Vertical::Center),
            self.placed_slot(SlotId::Weapon2, center_w, center_h, Horizontal::Center, Vertical::Top),
            self.placed_slot(SlotId::Weapon3, side_w, side_h, Horizontal::Right, Vertical::Center),
            self.placed_slot(
                SlotId::Weapon4,
                center_w,
                center_h,
                Horizontal::Center,
                Vertical::Bottom
            ),
        ]
        .width(Length::Fixed(WEAPONS_WIDTH))
        .height(Length::Fixed(WEAPONS_HEIGHT))
        .into()
    }

    /// Support row: repkit and ordnance.
    fn support_section(&self) -> Element<Message> {
        row![
            self.slot_element(SlotId::Repkit, SUPPORT_WIDTH, SUPPORT_HEIGHT),
            self.slot_element(SlotId::Ordnance, SUPPORT_WIDTH, SUPPORT_HEIGHT),
        ]
        .spacing(12)
        .into()
    }

    /// Auxiliary row: class mod, shield, enhancement.
    fn auxiliaries_section(&self) -> Element<Message> {
        row![
            self.slot_element(SlotId::ClassMod, AUX_WIDTH, AUX_HEIGHT),
            self.slot_element(SlotId::Shield, AUX_WIDTH, AUX_HEIGHT),
            self.slot_element(SlotId::Enhancement, AUX_WIDTH, AUX_HEIGHT),
        ]
        .spacing(12)
        .into()
    }

    /// One weapon slot pinned to its edge of the cross container.
    fn placed_slot(
        &self,
        slot: SlotId,
        width: f32,
        height: f32,
        align_x: Horizontal,
        align_y: Vertical,
    ) -> Element<Message> {
        container(self.slot_element(slot, width, height))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(align_x)
            .align_y(align_y)
            .into()
    }

    /// One slot: the painted canvas, with the occupant's icon centered on
    /// top when one resolved.
    fn slot_element(&self, slot: SlotId, width: f32, height: f32) -> Element<Message> {
        let icon = self.icons.get(&slot);

        let slot_canvas = canvas(SlotCanvas {
            kind: slot.kind(),
            rarity: self.equipment.rarity_of(slot),
            editable: self.editable,
            show_placeholder: icon.is_none(),
            on_press: Some(Message::SlotClicked(slot)),
        })
        .width(Length::Fixed(width))
        .height(Length::Fixed(height));

        match icon {
            Some(handle) => {
                // Scale to fit, preserving aspect ratio
                let icon_size = (width - 20.0).min(height - 20.0).min(80.0);
                stack![
                    slot_canvas,
                    container(
                        image(handle.clone())
                            .width(Length::Fixed(icon_size))
                            .height(Length::Fixed(icon_size))
                    )
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center),
                ]
                .width(Length::Fixed(width))
                .height(Length::Fixed(height))
                .into()
            }
            None => slot_canvas.into(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// The fixed item assigned on click until the item picker dialog exists.
fn demo_item() -> ItemRef {
    ItemRef {
        weapon_type: WeaponType::Assault,
        rarity: Rarity::Purple,
        manufacturer: "jakobs".to_string(),
    }
}

/// Vertical window background gradient from the planner's CSS.
fn window_background(_theme: &Theme) -> container::Style {
    let gradient = iced::gradient::Linear::new(Radians(std::f32::consts::PI))
        .add_stop(0.2552, style::BASE_BG)
        .add_stop(0.5751, style::DARK_BG)
        .add_stop(0.7525, style::DARK_BG)
        .add_stop(1.0, style::BASE_BG);

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(gradient))),
        ..container::Style::default()
    }
}

/// Turn a resolved location into an icon handle. Remote URLs and files
/// that fail to decode yield None; the slot then shows its placeholder.
fn load_icon(location: &str) -> Option<image::Handle> {
    if location.starts_with("http") {
        return None;
    }

    let path = Path::new(location);
    if !path.exists() {
        return None;
    }

    match ::image::image_dimensions(path) {
        Ok(_) => Some(image::Handle::from_path(path)),
        Err(e) => {
            eprintln!("⚠️  Could not decode icon {}: {}", location, e);
            None
        }
    }
}

/// Async load of the scraped game data file (absence is normal).
async fn load_game_data(path: PathBuf) -> Option<GameData> {
    let contents = tokio::fs::read_to_string(&path).await.ok()?;
    match GameData::from_json(&contents) {
        Ok(data) => {
            println!(
                "📊 Loaded game data: {} manufacturers, {} elements",
                data.manufacturers.len(),
                data.elements.len()
            );
            Some(data)
        }
        Err(e) => {
            eprintln!("⚠️  Could not parse game data: {}", e);
            None
        }
    }
}

fn main() -> iced::Result {
    let base_dir = discover_base_dir();
    let font_bytes = fonts::load_fonts(&base_dir);
    let have_fonts = !font_bytes.is_empty();

    let mut app = iced::application("Loadout Editor", LoadoutEditor::update, LoadoutEditor::view)
        .theme(LoadoutEditor::theme)
        .window_size(iced::Size::new(600.0, 800.0))
        .centered();

    for bytes in font_bytes {
        app = app.font(bytes);
    }
    if have_fonts {
        app = app.default_font(Font::with_name(fonts::FONT_MAIN));
    }

    app.run_with(LoadoutEditor::new)
}
