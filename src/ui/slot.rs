/// Slot canvas painter
///
/// Draws one equipment slot: the 1px rarity border along the slot's clip
/// polygon, the gradient background strictly inside it, the weapon number
/// badge, and the "+" placeholder when there is no icon to show. Icons
/// themselves are overlaid as image widgets by the shell; this program only
/// paints vectors and text.

use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, gradient, Frame, Gradient, Path, Stroke};
use iced::{alignment, Font, Pixels, Point, Rectangle, Renderer, Size, Theme};

use crate::fonts;
use crate::state::equipment::{SlotKind, SupportKind, WeaponPosition};
use crate::style::{self, Rarity, RarityPalette};
use crate::ui::geometry;

/// Slices used to rasterize the weapon radial gradient.
const RADIAL_RINGS: usize = 24;

/// Segments in each circle slice.
const CIRCLE_SEGMENTS: usize = 48;

/// Weapon number badge edge length.
const BADGE_SIZE: f32 = 40.0;

/// Fill inset for weapon polygons (border sits at inset 0).
const WEAPON_FILL_INSET: f32 = 1.0;

/// Fill inset for support polygons.
const SUPPORT_FILL_INSET: f32 = 3.0;

/// One slot's paint state. Rebuilt by the shell on every view pass.
#[derive(Debug, Clone)]
pub struct SlotCanvas<Message> {
    pub kind: SlotKind,
    pub rarity: Rarity,
    pub editable: bool,
    /// Show the "+" glyph (slot empty, or its icon failed to resolve/decode)
    pub show_placeholder: bool,
    pub on_press: Option<Message>,
}

impl<Message: Clone> canvas::Program<Message> for SlotCanvas<Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let palette = self.rarity.palette();

        match self.kind {
            SlotKind::Weapon(position) => {
                draw_weapon(&mut frame, position, &palette);
                draw_badge(&mut frame, position);
            }
            SlotKind::Support(kind) => draw_support(&mut frame, kind, &palette),
            SlotKind::Auxiliary(_) => draw_auxiliary(&mut frame, &palette),
        }

        if self.show_placeholder {
            draw_placeholder(&mut frame);
        }

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        if let canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            if self.editable && cursor.is_over(bounds) {
                return (canvas::event::Status::Captured, self.on_press.clone());
            }
        }

        (canvas::event::Status::Ignored, None)
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        if self.editable && cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Weapon slot: notched-hexagon border plus a radial gradient focused on
/// the outward edge. The canvas gradient API is linear-only, so the radial
/// fill is painted as concentric circle slices clipped to the polygon,
/// outermost first.
fn draw_weapon(frame: &mut Frame, position: WeaponPosition, palette: &RarityPalette) {
    let size = frame.size();

    let border = geometry::weapon_clip(position, size, 0.0);
    frame.stroke(
        &polygon_path(&border),
        Stroke::default().with_color(palette.border).with_width(1.0),
    );

    let fill = geometry::weapon_clip(position, size, WEAPON_FILL_INSET);
    let center = geometry::weapon_gradient_center(position, size);
    let radius = size.width * geometry::RADIAL_RADIUS_FACTOR;

    for ring in (1..=RADIAL_RINGS).rev() {
        let t = ring as f32 / RADIAL_RINGS as f32;
        let circle = geometry::circle_polygon(center, radius * t, CIRCLE_SEGMENTS);
        let slice = geometry::clip_convex(&circle, &fill);
        if slice.len() < 3 {
            continue;
        }
        frame.fill(
            &polygon_path(&slice),
            geometry::radial_color_at(t, &palette.gradient),
        );
    }
}

/// Support slot: mirrored heptagon border and a top-left to bottom-right
/// linear gradient, dimmest at the origin.
fn draw_support(frame: &mut Frame, kind: SupportKind, palette: &RarityPalette) {
    let size = frame.size();

    let border = geometry::support_clip(kind, size, 0.0);
    frame.stroke(
        &polygon_path(&border),
        Stroke::default().with_color(palette.border).with_width(1.0),
    );

    let fill = geometry::support_clip(kind, size, SUPPORT_FILL_INSET);
    frame.fill(&polygon_path(&fill), linear_fill(size, palette));
}

/// Auxiliary slot: plain rectangle border with a 2px-inset gradient fill.
fn draw_auxiliary(frame: &mut Frame, palette: &RarityPalette) {
    let size = frame.size();

    let (border_origin, border_size) = geometry::aux_border_rect(size);
    frame.stroke(
        &Path::rectangle(border_origin, border_size),
        Stroke::default().with_color(palette.border).with_width(1.0),
    );

    let (bg_origin, bg_size) = geometry::aux_background_rect(size);
    frame.fill(&Path::rectangle(bg_origin, bg_size), linear_fill(size, palette));
}

/// The shared support/auxiliary gradient: start@0.0, mid@0.6, end@1.0 from
/// top-left to bottom-right.
fn linear_fill(size: Size, palette: &RarityPalette) -> Gradient {
    gradient::Linear::new(Point::ORIGIN, Point::new(size.width, size.height))
        .add_stop(0.0, palette.gradient[0])
        .add_stop(geometry::LINEAR_MID_STOP, palette.gradient[1])
        .add_stop(1.0, palette.gradient[2])
        .into()
}

/// Weapon number badge pinned to the outward edge.
fn draw_badge(frame: &mut Frame, position: WeaponPosition) {
    let size = frame.size();
    let center_x = size.width / 2.0;
    let center_y = size.height / 2.0;

    let origin = match position {
        WeaponPosition::One => Point::new(0.0, center_y - BADGE_SIZE / 2.0),
        WeaponPosition::Two => Point::new(center_x - BADGE_SIZE / 2.0, 0.0),
        WeaponPosition::Three => Point::new(size.width - BADGE_SIZE, center_y - BADGE_SIZE / 2.0),
        WeaponPosition::Four => Point::new(center_x - BADGE_SIZE / 2.0, size.height - BADGE_SIZE),
    };

    frame.fill(
        &Path::rectangle(origin, Size::new(BADGE_SIZE, BADGE_SIZE)),
        style::BADGE_BG,
    );

    frame.fill_text(canvas::Text {
        content: position.number().to_string(),
        position: Point::new(origin.x + BADGE_SIZE / 2.0, origin.y + BADGE_SIZE / 2.0),
        color: style::GREY_2,
        size: Pixels(22.0),
        font: Font::with_name(fonts::FONT_NUMBER),
        horizontal_alignment: alignment::Horizontal::Center,
        vertical_alignment: alignment::Vertical::Center,
        ..canvas::Text::default()
    });
}

/// The "+" glyph shown when a slot has no icon to display.
fn draw_placeholder(frame: &mut Frame) {
    let size = frame.size();
    frame.fill_text(canvas::Text {
        content: "+".to_string(),
        position: Point::new(size.width / 2.0, size.height / 2.0),
        color: style::GREY_3,
        size: Pixels(48.0),
        horizontal_alignment: alignment::Horizontal::Center,
        vertical_alignment: alignment::Vertical::Center,
        ..canvas::Text::default()
    });
}

fn polygon_path(points: &[Point]) -> Path {
    Path::new(|builder| {
        if let Some((first, rest)) = points.split_first() {
            builder.move_to(*first);
            for point in rest {
                builder.line_to(*point);
            }
            builder.close();
        }
    })
}
