use std::path::PathBuf;

use chrono::NaiveDate;
use larder_core::{DeliveryLine, Order};
use larder_order::{distinct_customers, Summary};

use crate::layout::{
    Document, Ink, TextOptions, FOOTER_RISE, LEFT_MARGIN, NOTE_COLUMNS, NOTE_COLUMN_WIDTH,
    NOTE_ROW_PITCH, PAGE_HEIGHT, PAGE_WIDTH, RIGHT_EDGE, SUMMARY_ROW_PITCH, TABLE_RIGHT_EDGE,
};
use crate::style::{FontAssets, StyleResolver, TextStyle};

const BLANK_CELL: &str = "_______";
const BLANK_LINE: &str =
    "__________________________________________________________________";

/// Static assets documents draw from: preferred fonts, an optional logo,
/// and the textual company mark used when the logo file is absent.
#[derive(Debug, Clone)]
pub struct DocAssets {
    pub fonts: FontAssets,
    pub logo: Option<PathBuf>,
    pub company_mark: String,
}

impl Default for DocAssets {
    fn default() -> Self {
        Self {
            fonts: FontAssets::default(),
            logo: None,
            company_mark: "LARDER".to_string(),
        }
    }
}

fn letterhead(doc: &mut Document, assets: &DocAssets, styles: &StyleResolver) {
    match assets.logo.as_ref().filter(|p| p.exists()) {
        Some(logo) => doc.image(logo.clone(), 400.0, 30.0, 150.0),
        None => {
            doc.font(styles.resolve(TextStyle::Bold), 25.0, Ink::Black);
            doc.text(
                assets.company_mark.clone(),
                LEFT_MARGIN,
                30.0,
                TextOptions::right(PAGE_WIDTH - 2.0 * LEFT_MARGIN),
            );
        }
    }
}

/// Delivery note: letterhead, title, customer/date metadata, one table row
/// per reconciled line, and a containers footer. The Issued, Received and
/// Returned columns are blank fill-in cells; the document is completed by
/// hand on the loading dock.
pub fn compose_delivery_note(
    assets: &DocAssets,
    customer: Option<&str>,
    date: NaiveDate,
    lines: &[DeliveryLine],
) -> Document {
    let styles = StyleResolver::probe(&assets.fonts);
    let mut doc = Document::new();

    letterhead(&mut doc, assets, &styles);

    doc.font(styles.resolve(TextStyle::Bold), 18.0, Ink::Black);
    doc.text(
        "Delivery Note",
        LEFT_MARGIN,
        140.0,
        TextOptions::centered(PAGE_WIDTH - 2.0 * LEFT_MARGIN),
    );

    doc.font(styles.resolve(TextStyle::Body), 12.0, Ink::Black);
    doc.text(
        format!("Customer: {}", customer.unwrap_or("All")),
        LEFT_MARGIN,
        175.0,
        TextOptions::default(),
    );
    doc.text(format!("Date: {date}"), LEFT_MARGIN, 190.0, TextOptions::default());

    let table_top = 215.0;
    doc.font(styles.resolve(TextStyle::Bold), 10.0, Ink::Black);
    doc.text("Product", LEFT_MARGIN, table_top, TextOptions::default());
    for (label, x) in ["Ordered", "Issued", "Received", "Returned"]
        .iter()
        .zip(NOTE_COLUMNS)
    {
        doc.text(*label, x, table_top, TextOptions::centered(NOTE_COLUMN_WIDTH));
    }
    doc.rule(
        (LEFT_MARGIN, table_top + 15.0),
        (TABLE_RIGHT_EDGE, table_top + 15.0),
    );

    doc.font(styles.resolve(TextStyle::Body), 10.0, Ink::Black);
    for (i, line) in lines.iter().enumerate() {
        let y = table_top + 30.0 + i as f32 * NOTE_ROW_PITCH;
        doc.text(line.product.clone(), LEFT_MARGIN, y, TextOptions::default());
        doc.text(
            line.ordered.to_string(),
            NOTE_COLUMNS[0],
            y,
            TextOptions::centered(NOTE_COLUMN_WIDTH),
        );
        for x in &NOTE_COLUMNS[1..] {
            doc.text(BLANK_CELL, *x, y, TextOptions::centered(NOTE_COLUMN_WIDTH));
        }
        doc.rule((LEFT_MARGIN, y + 15.0), (TABLE_RIGHT_EDGE, y + 15.0));
    }

    let footer_y = PAGE_HEIGHT - FOOTER_RISE;
    doc.rule((LEFT_MARGIN, footer_y), (RIGHT_EDGE, footer_y));
    doc.font(styles.resolve(TextStyle::Bold), 12.0, Ink::Black);
    doc.text("CONTAINERS:", LEFT_MARGIN, footer_y + 10.0, TextOptions::default());
    doc.font(styles.resolve(TextStyle::Body), 12.0, Ink::Black);
    doc.text(BLANK_LINE, LEFT_MARGIN, footer_y + 30.0, TextOptions::default());

    doc
}

/// Product summary for one delivery date: a Product/Quantity table in the
/// summary's own row order (first appearance across the filtered orders).
pub fn compose_product_summary(assets: &DocAssets, date: NaiveDate, summary: &Summary) -> Document {
    let styles = StyleResolver::probe(&assets.fonts);
    let mut doc = Document::new();

    doc.font(styles.resolve(TextStyle::Bold), 20.0, Ink::Black);
    doc.text(
        format!("Aggregate Summary - {date}"),
        LEFT_MARGIN,
        50.0,
        TextOptions::centered(PAGE_WIDTH - 2.0 * LEFT_MARGIN),
    );

    let header_y = 90.0;
    doc.font(styles.resolve(TextStyle::Bold), 14.0, Ink::Black);
    doc.text("Product", LEFT_MARGIN, header_y, TextOptions::default());
    doc.text("Quantity", 400.0, header_y, TextOptions::default());
    doc.rule((LEFT_MARGIN, header_y + 15.0), (RIGHT_EDGE, header_y + 15.0));

    doc.font(styles.resolve(TextStyle::Body), 12.0, Ink::Black);
    for (i, (product, quantity)) in summary.rows().iter().enumerate() {
        let y = header_y + 30.0 + i as f32 * SUMMARY_ROW_PITCH;
        doc.text(product.clone(), LEFT_MARGIN, y, TextOptions::default());
        doc.text(quantity.to_string(), 400.0, y, TextOptions::default());
    }

    doc
}

/// Per-customer order list for one delivery date. Customers appear in
/// first-seen collection order, each as an accent-ink heading followed by
/// that customer's order lines and a separator rule.
pub fn compose_order_list(assets: &DocAssets, date: NaiveDate, orders: &[Order]) -> Document {
    let styles = StyleResolver::probe(&assets.fonts);
    let mut doc = Document::new();

    doc.font(styles.resolve(TextStyle::Bold), 20.0, Ink::Black);
    doc.text(
        format!("Order List - {date}"),
        LEFT_MARGIN,
        50.0,
        TextOptions::centered(PAGE_WIDTH - 2.0 * LEFT_MARGIN),
    );

    let mut y = 90.0;
    for customer in distinct_customers(orders, Some(date)) {
        doc.font(styles.resolve(TextStyle::Bold), 16.0, Ink::Accent);
        doc.text(format!("Customer: {customer}"), LEFT_MARGIN, y, TextOptions::default());
        y += 22.0;

        doc.font(styles.resolve(TextStyle::Body), 12.0, Ink::Black);
        for order in orders
            .iter()
            .filter(|o| o.delivery_date == date && o.customer == customer)
        {
            doc.text(
                format!("- {}: {} units", order.product, order.quantity),
                LEFT_MARGIN,
                y,
                TextOptions::default(),
            );
            y += 16.0;
        }

        y += 8.0;
        doc.rule((LEFT_MARGIN, y), (RIGHT_EDGE, y));
        y += 14.0;
    }

    doc
}
