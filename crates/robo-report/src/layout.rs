//! Fixed single-page layout.
//!
//! Blocks are placed top to bottom by a running cursor. Each block has a
//! declared rectangle computed from its measured content; the cursor drops by
//! that height plus a fixed gap. A page that runs long is still laid out in
//! full and flagged as overflowing.

use serde::Serialize;

use robo_model::{Flag, Record};
use robo_query::{CostOption, estimate, recommended};

use crate::format::{NOT_AVAILABLE, format_currency, format_flag, format_number, text_or_na};
use crate::image::{DecodedImage, fit_within};
use crate::metrics::{Font, text_width};
use crate::options::ReportOptions;
use crate::wrap::{truncate_to_width, wrap_text};

/// US Letter, in points.
pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;
pub const MARGIN: f32 = 40.0;
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

/// 1.6 inches.
pub const IMAGE_BOX: f32 = 115.2;

pub const IMAGE_PLACEHOLDER: &str = "Image not available";
pub const DESCRIPTION_PLACEHOLDER: &str = "Description not available.";

const TITLE_SIZE: f32 = 24.0;
const SUBTITLE_SIZE: f32 = 12.0;
const HEADING_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 10.0;
const SMALL_SIZE: f32 = 9.0;
const LINE_FACTOR: f32 = 1.4;

const BLOCK_GAP: f32 = 12.0;
const INNER_GAP: f32 = 8.0;
const COLUMN_GAP: f32 = 12.0;
const ROW_HEIGHT: f32 = 16.0;
const CELL_PADDING: f32 = 4.0;
const DETAIL_VALUE_OFFSET: f32 = 160.0;
const LINK_VALUE_OFFSET: f32 = 110.0;

/// Axis-aligned rectangle in PDF user space (origin bottom-left).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Builds a rectangle from its top edge.
    pub fn from_top(x: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y: top - height,
            width,
            height,
        }
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Whether the two rectangles share any area.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.top()
            && other.y < self.top()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Color {
    Black,
    Link,
    HeaderFill,
}

impl Color {
    pub fn rgb(&self) -> (f32, f32, f32) {
        match self {
            Color::Black => (0.0, 0.0, 0.0),
            Color::Link => (0.0, 0.0, 0.8),
            Color::HeaderFill => (0.9, 0.9, 0.9),
        }
    }
}

/// One run of text on a single baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    pub baseline: f32,
    pub font: Font,
    pub size: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Shape {
    Fill { rect: Rect, color: Color },
    Stroke { rect: Rect },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BlockKind {
    Title,
    Image,
    ImagePlaceholder,
    Features,
    Summary,
    Details,
    Table { title: String },
    PurchaseLink,
}

/// A positioned piece of the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    pub rect: Rect,
    pub shapes: Vec<Shape>,
    pub text: Vec<TextRun>,
    /// Where the product image is drawn, for [`BlockKind::Image`].
    pub image: Option<Rect>,
}

impl Block {
    fn new(kind: BlockKind, rect: Rect) -> Self {
        Self {
            kind,
            rect,
            shapes: Vec::new(),
            text: Vec::new(),
            image: None,
        }
    }

    /// All text in the block, one run per line.
    pub fn plain_text(&self) -> Vec<&str> {
        self.text.iter().map(|run| run.text.as_str()).collect()
    }
}

/// Every block of one report page, in drawing order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLayout {
    pub blocks: Vec<Block>,
    /// Lowest point reached by the cursor.
    pub bottom: f32,
}

impl ReportLayout {
    /// Whether content runs past the bottom margin.
    pub fn overflows(&self) -> bool {
        self.bottom < MARGIN
    }

    pub fn block(&self, kind: &BlockKind) -> Option<&Block> {
        self.blocks.iter().find(|block| &block.kind == kind)
    }

    pub fn tables(&self) -> impl Iterator<Item = &Block> {
        self.blocks
            .iter()
            .filter(|block| matches!(block.kind, BlockKind::Table { .. }))
    }
}

/// Stacks lines of text from a top edge down.
struct TextColumn {
    x: f32,
    top: f32,
    y: f32,
    runs: Vec<TextRun>,
}

impl TextColumn {
    fn new(x: f32, top: f32) -> Self {
        Self {
            x,
            top,
            y: top,
            runs: Vec::new(),
        }
    }

    fn line(&mut self, text: &str, font: Font, size: f32, color: Color) {
        self.labeled(&[(0.0, text, font, color)], size);
    }

    /// Several runs sharing one baseline, each offset from the column edge.
    fn labeled(&mut self, parts: &[(f32, &str, Font, Color)], size: f32) {
        let baseline = self.y - size;
        for &(offset, text, font, color) in parts {
            self.runs.push(TextRun {
                text: text.to_string(),
                x: self.x + offset,
                baseline,
                font,
                size,
                color,
            });
        }
        self.y -= size * LINE_FACTOR;
    }

    fn gap(&mut self, amount: f32) {
        self.y -= amount;
    }

    fn height(&self) -> f32 {
        self.top - self.y
    }

    fn into_block(self, kind: BlockKind, width: f32) -> Block {
        let mut block = Block::new(kind, Rect::from_top(self.x, self.top, width, self.height()));
        block.text = self.runs;
        block
    }
}

struct Table {
    title: String,
    rows: Vec<TableRow>,
    /// Share of the width given to the label column.
    label_share: f32,
}

struct TableRow {
    label: String,
    value: String,
    emphasized: bool,
}

impl TableRow {
    fn new(label: impl Into<String>, value: String) -> Self {
        Self {
            label: label.into(),
            value,
            emphasized: false,
        }
    }
}

impl Table {
    fn height(&self) -> f32 {
        (self.rows.len() + 1) as f32 * ROW_HEIGHT
    }

    /// Header row is one merged bold cell on a grey fill; data rows are
    /// label/value pairs. Cell text is cut to fit inside its grid lines.
    fn into_block(self, x: f32, top: f32, width: f32) -> Block {
        let mut block = Block::new(
            BlockKind::Table {
                title: self.title.clone(),
            },
            Rect::from_top(x, top, width, self.height()),
        );

        let header = Rect::from_top(x, top, width, ROW_HEIGHT);
        block.shapes.push(Shape::Fill {
            rect: header,
            color: Color::HeaderFill,
        });
        block.shapes.push(Shape::Stroke { rect: header });
        block.text.push(cell_text(&self.title, header, Font::Bold));

        let label_width = (width * self.label_share).round();
        for (index, row) in self.rows.iter().enumerate() {
            let row_top = top - (index + 1) as f32 * ROW_HEIGHT;
            let label_cell = Rect::from_top(x, row_top, label_width, ROW_HEIGHT);
            let value_cell = Rect::from_top(x + label_width, row_top, width - label_width, ROW_HEIGHT);
            let font = if row.emphasized { Font::Bold } else { Font::Regular };
            block.shapes.push(Shape::Stroke { rect: label_cell });
            block.shapes.push(Shape::Stroke { rect: value_cell });
            block.text.push(cell_text(&row.label, label_cell, font));
            block.text.push(cell_text(&row.value, value_cell, font));
        }
        block
    }
}

fn cell_text(text: &str, cell: Rect, font: Font) -> TextRun {
    TextRun {
        text: truncate_to_width(text, font, BODY_SIZE, cell.width - 2.0 * CELL_PADDING),
        x: cell.x + CELL_PADDING,
        baseline: cell.y + (ROW_HEIGHT - BODY_SIZE) / 2.0 + 1.5,
        font,
        size: BODY_SIZE,
        color: Color::Black,
    }
}

/// Feature bullets derived from the record's flags. "Touch Required" is
/// always listed.
pub fn feature_lines(record: &Record) -> Vec<&'static str> {
    let mut lines = Vec::new();
    if record.device_required == Some(Flag::No) {
        lines.push("\u{2022} No Device Required");
    }
    if record.auditory == Some(Flag::No) {
        lines.push("\u{2022} No Audio Required");
    }
    if record.visual == Some(Flag::No) {
        lines.push("\u{2022} No Text/Visual Required");
    }
    lines.push("\u{2022} Touch Required");
    lines
}

/// Plans the page for one record.
///
/// `image` is the already-fetched product image, if any. Missing values
/// render as "N/A" or a placeholder; planning never fails.
pub fn plan(record: &Record, image: Option<&DecodedImage>, options: &ReportOptions) -> ReportLayout {
    let mut blocks = Vec::new();
    let mut top = PAGE_HEIGHT - MARGIN;

    // Title and manufacturer.
    let mut title = TextColumn::new(MARGIN, top);
    for line in wrap_text(&record.name, Font::Bold, TITLE_SIZE, CONTENT_WIDTH) {
        title.line(&line, Font::Bold, TITLE_SIZE, Color::Black);
    }
    let manufacturer = truncate_to_width(
        &format!("by {}", record.manufacturer),
        Font::Regular,
        SUBTITLE_SIZE,
        CONTENT_WIDTH,
    );
    title.line(&manufacturer, Font::Regular, SUBTITLE_SIZE, Color::Black);
    let title = title.into_block(BlockKind::Title, CONTENT_WIDTH);
    top -= title.rect.height + BLOCK_GAP;
    blocks.push(title);

    // Media row: image on the left; features and summary on the right.
    blocks.push(image_block(image, top));

    let right_x = MARGIN + IMAGE_BOX + COLUMN_GAP * 2.0;
    let right_width = PAGE_WIDTH - MARGIN - right_x;

    let mut features = TextColumn::new(right_x, top);
    for line in feature_lines(record) {
        features.line(line, Font::Regular, BODY_SIZE, Color::Black);
    }
    let features = features.into_block(BlockKind::Features, right_width);
    let summary_top = top - features.rect.height - INNER_GAP;

    let mut summary = TextColumn::new(right_x, summary_top);
    summary.line("Product Summary", Font::Bold, HEADING_SIZE, Color::Black);
    summary.gap(2.0);
    let description = record
        .description
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(DESCRIPTION_PLACEHOLDER);
    for line in wrap_text(description, Font::Regular, BODY_SIZE, right_width) {
        summary.line(&line, Font::Regular, BODY_SIZE, Color::Black);
    }
    let summary = summary.into_block(BlockKind::Summary, right_width);

    let right_height = top - summary.rect.y;
    top -= IMAGE_BOX.max(right_height) + BLOCK_GAP;
    blocks.push(features);
    blocks.push(summary);

    // Details.
    let grade = record
        .min_grade
        .as_ref()
        .map_or_else(|| NOT_AVAILABLE.to_string(), ToString::to_string);
    let students = record
        .max_users_text
        .clone()
        .unwrap_or_else(|| format_number(record.max_users));
    let mut details = TextColumn::new(MARGIN, top);
    for (label, value) in [("Grade Level:", grade.as_str()), ("Students Per Device:", students.as_str())] {
        details.labeled(
            &[
                (0.0, label, Font::Bold, Color::Black),
                (DETAIL_VALUE_OFFSET, value, Font::Regular, Color::Black),
            ],
            BODY_SIZE,
        );
    }
    details.line("Computer Science Standard(s):", Font::Bold, BODY_SIZE, Color::Black);
    let standards = truncate_to_width(&options.standards, Font::Regular, SMALL_SIZE, CONTENT_WIDTH);
    details.line(&standards, Font::Regular, SMALL_SIZE, Color::Black);
    let details = details.into_block(BlockKind::Details, CONTENT_WIDTH);
    top -= details.rect.height + BLOCK_GAP;
    blocks.push(details);

    // Attribute tables, two per row.
    let half = (CONTENT_WIDTH - COLUMN_GAP) / 2.0;
    for (left, right) in [
        (power_table(record), accessibility_table(record)),
        (usage_table(record), price_table(record)),
    ] {
        let row_height = left.height().max(right.height());
        blocks.push(left.into_block(MARGIN, top, half));
        blocks.push(right.into_block(MARGIN + half + COLUMN_GAP, top, half));
        top -= row_height + BLOCK_GAP;
    }

    if let Some(students) = options.class_size {
        let table = cost_table(&estimate(record, students), students);
        let height = table.height();
        blocks.push(table.into_block(MARGIN, top, CONTENT_WIDTH));
        top -= height + BLOCK_GAP;
    }

    // Purchase link.
    let (link, color) = match record.purchase_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => (url, Color::Link),
        _ => (NOT_AVAILABLE, Color::Black),
    };
    let link = truncate_to_width(link, Font::Regular, BODY_SIZE, CONTENT_WIDTH - LINK_VALUE_OFFSET);
    let mut purchase = TextColumn::new(MARGIN, top);
    purchase.labeled(
        &[
            (0.0, "More Information:", Font::Bold, Color::Black),
            (LINK_VALUE_OFFSET, link.as_str(), Font::Regular, color),
        ],
        BODY_SIZE,
    );
    let purchase = purchase.into_block(BlockKind::PurchaseLink, CONTENT_WIDTH);
    let bottom = purchase.rect.y;
    blocks.push(purchase);

    ReportLayout { blocks, bottom }
}

fn image_block(image: Option<&DecodedImage>, top: f32) -> Block {
    match image {
        Some(image) => {
            let (width, height) = fit_within(image.width, image.height, IMAGE_BOX, IMAGE_BOX);
            let rect = Rect::from_top(MARGIN, top, width, height);
            let mut block = Block::new(BlockKind::Image, rect);
            block.image = Some(rect);
            block
        }
        None => {
            let rect = Rect::from_top(MARGIN, top, IMAGE_BOX, IMAGE_BOX);
            let mut block = Block::new(BlockKind::ImagePlaceholder, rect);
            block.shapes.push(Shape::Stroke { rect });
            let text_x =
                MARGIN + (IMAGE_BOX - text_width(IMAGE_PLACEHOLDER, Font::Regular, SMALL_SIZE)) / 2.0;
            block.text.push(TextRun {
                text: IMAGE_PLACEHOLDER.to_string(),
                x: text_x,
                baseline: top - IMAGE_BOX / 2.0 - SMALL_SIZE / 3.0,
                font: Font::Regular,
                size: SMALL_SIZE,
                color: Color::Black,
            });
            block
        }
    }
}

fn power_table(record: &Record) -> Table {
    Table {
        title: "Power & Batteries".to_string(),
        rows: vec![
            TableRow::new("Rechargeable", format_flag(record.rechargeable)),
            TableRow::new("Batteries", text_or_na(record.batteries.as_deref())),
            TableRow::new("Battery Type", text_or_na(record.battery_type.as_deref())),
        ],
        label_share: 0.5,
    }
}

fn accessibility_table(record: &Record) -> Table {
    Table {
        title: "Accessibility".to_string(),
        rows: vec![
            TableRow::new("Visual", format_flag(record.visual)),
            TableRow::new("Auditory", format_flag(record.auditory)),
            TableRow::new("Fine Motor", format_flag(record.fine_motor)),
        ],
        label_share: 0.5,
    }
}

fn usage_table(record: &Record) -> Table {
    Table {
        title: "Usage".to_string(),
        rows: vec![
            TableRow::new(
                "Internet",
                record
                    .internet
                    .map_or_else(|| NOT_AVAILABLE.to_string(), |value| value.to_string()),
            ),
            TableRow::new("Screen-Free", format_flag(record.screen_free)),
            TableRow::new("Device Required", format_flag(record.device_required)),
            TableRow::new("Space Requirement", format_number(record.space_requirement)),
            TableRow::new("Consumables", format_flag(record.consumables)),
            TableRow::new("Set Available", format_flag(record.set_available)),
        ],
        label_share: 0.5,
    }
}

fn price_table(record: &Record) -> Table {
    let set_label = match record.set_size.as_deref().map(str::trim) {
        Some(size) if !size.is_empty() => format!("Classroom Set ({size})"),
        _ => "Classroom Set".to_string(),
    };
    Table {
        title: "Price".to_string(),
        rows: vec![
            TableRow::new("Single Unit", format_currency(record.price)),
            TableRow::new(set_label, format_currency(record.price_per_set)),
        ],
        label_share: 0.5,
    }
}

fn cost_table(options: &[CostOption], students: i64) -> Table {
    let best = recommended(options);
    let mut rows: Vec<TableRow> = options
        .iter()
        .map(|option| {
            let is_best = best.is_some_and(|b| std::ptr::eq(b, option));
            let label = if is_best {
                format!("{} (recommended)", option.label)
            } else {
                option.label.clone()
            };
            TableRow {
                label,
                value: format_currency(Some(option.total)),
                emphasized: is_best,
            }
        })
        .collect();
    if students < 1 {
        rows.push(TableRow::new("Class size must be at least 1", NOT_AVAILABLE.to_string()));
    } else if rows.is_empty() {
        rows.push(TableRow::new("Not enough pricing data", NOT_AVAILABLE.to_string()));
    }
    Table {
        title: format!("Cost Estimate ({students} students)"),
        rows,
        label_share: 0.7,
    }
}
