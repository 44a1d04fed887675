//! Product listing page: view models and rendering.
//!
//! [`ProductCard`] holds the per-product facts derived at render time
//! (total stock, stock tier, size badges in display order, formatted price).
//! None of these are stored; they are recomputed from the fetched rows on
//! every request.

use retrokit_core::pricing::format_rupiah;
use retrokit_core::sizes::sort_by_size;
use retrokit_core::stock::{total_stock, StockTier};
use retrokit_db::models::category::Category;
use retrokit_db::models::product::{ProductFilter, ProductListing};
use urlencoding::encode;

use crate::views::html::escape;
use crate::views::layout::{render_document, SITE_TITLE};

/// Empty-state text when a category filter matched nothing.
pub const EMPTY_FILTERED_MESSAGE: &str = "Tidak ada produk dalam kategori ini.";

/// Empty-state text when the whole catalog is empty.
pub const EMPTY_CATALOG_MESSAGE: &str = "Belum ada produk tersedia.";

/// Label of the "no filter" entry in the filter bar.
pub const ALL_CATEGORIES_LABEL: &str = "Semua";

const LISTING_PATH: &str = "/products";

// ---------------------------------------------------------------------------
// View models
// ---------------------------------------------------------------------------

/// Image shown on a product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    pub url: String,
    pub alt: String,
}

/// One size badge; `in_stock` is false for struck-through sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeBadge {
    pub label: String,
    pub in_stock: bool,
}

/// Everything a product card displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub slug: String,
    pub name: String,
    pub club: String,
    pub season: String,
    pub category_name: String,
    pub image: Option<CardImage>,
    pub price_label: String,
    pub total_stock: i64,
    pub tier: StockTier,
    pub sizes: Vec<SizeBadge>,
}

impl ProductCard {
    pub fn from_listing(listing: &ProductListing) -> Self {
        let product = &listing.product;

        let mut sizes: Vec<SizeBadge> = listing
            .sizes
            .iter()
            .map(|s| SizeBadge {
                label: s.size.clone(),
                in_stock: s.stock > 0,
            })
            .collect();
        sort_by_size(&mut sizes, |badge| badge.label.as_str());

        let total = total_stock(listing.sizes.iter().map(|s| s.stock));

        let image = listing.primary_image.as_ref().map(|img| CardImage {
            url: img.url.clone(),
            alt: img
                .alt
                .clone()
                .filter(|alt| !alt.is_empty())
                .unwrap_or_else(|| product.name.clone()),
        });

        Self {
            slug: product.slug.clone(),
            name: product.name.clone(),
            club: product.club.clone(),
            season: product.season.clone(),
            category_name: listing.category.name.clone(),
            image,
            price_label: format_rupiah(product.price),
            total_stock: total,
            tier: StockTier::from_total(total),
            sizes,
        }
    }
}

/// Entry in the category filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// The whole listing page, ready to render.
#[derive(Debug, Clone)]
pub struct ProductListingPage {
    pub filtered: bool,
    pub filters: Vec<FilterLink>,
    pub cards: Vec<ProductCard>,
    pub seed_action_path: String,
}

impl ProductListingPage {
    pub fn new(
        filter: &ProductFilter,
        categories: &[Category],
        listings: &[ProductListing],
        seed_action_path: &str,
    ) -> Self {
        let active = filter.category_slug.as_deref();

        let mut filters = Vec::with_capacity(categories.len() + 1);
        filters.push(FilterLink {
            label: ALL_CATEGORIES_LABEL.to_string(),
            href: LISTING_PATH.to_string(),
            active: active.is_none(),
        });
        filters.extend(categories.iter().map(|c| FilterLink {
            label: c.name.clone(),
            href: format!("{LISTING_PATH}?category={}", encode(&c.slug)),
            active: active == Some(c.slug.as_str()),
        }));

        Self {
            filtered: filter.is_filtered(),
            filters,
            cards: listings.iter().map(ProductCard::from_listing).collect(),
            seed_action_path: seed_action_path.to_string(),
        }
    }

    /// Render the full HTML document.
    pub fn render(&self) -> String {
        let mut main = String::from("<div class=\"container\">");
        main.push_str(&self.render_header());
        main.push_str(&self.render_filters());
        if self.cards.is_empty() {
            main.push_str(&self.render_empty_state());
        } else {
            main.push_str("<div class=\"product-grid\">");
            for card in &self.cards {
                main.push_str(&render_card(card));
            }
            main.push_str("</div>");
        }
        main.push_str("</div>");
        render_document(SITE_TITLE, &main)
    }

    fn render_header(&self) -> String {
        format!(
            "<header class=\"listing-header\">\
<div>\
<h1>Koleksi Jersey Retro</h1>\
<p>Temukan jersey klasik favorit Anda dari berbagai klub legendaris</p>\
</div>\
<div>\
<p>Total Produk</p>\
<p class=\"product-count\">{}</p>\
</div>\
</header>",
            self.cards.len()
        )
    }

    fn render_filters(&self) -> String {
        let mut out = String::from("<nav class=\"filters\"><span>Filter Kategori:</span>");
        for link in &self.filters {
            let class = if link.active {
                "filter-link is-active"
            } else {
                "filter-link"
            };
            out.push_str(&format!(
                "<a class=\"{class}\" href=\"{}\">{}</a>",
                escape(&link.href),
                escape(&link.label),
            ));
        }
        out.push_str("</nav>");
        out
    }

    fn render_empty_state(&self) -> String {
        let mut out = String::from("<div class=\"empty-state\"><div class=\"placeholder\">⚽</div>");
        if self.filtered {
            out.push_str(&format!("<p>{EMPTY_FILTERED_MESSAGE}</p>"));
        } else {
            out.push_str(&format!(
                "<p>{EMPTY_CATALOG_MESSAGE}</p>\
<form action=\"{}\" method=\"POST\">\
<button type=\"submit\">Seed Database</button>\
</form>",
                escape(&self.seed_action_path),
            ));
        }
        out.push_str("</div>");
        out
    }
}

// ---------------------------------------------------------------------------
// Card rendering
// ---------------------------------------------------------------------------

fn render_card(card: &ProductCard) -> String {
    let media = match &card.image {
        Some(image) => format!(
            "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
            escape(&image.url),
            escape(&image.alt),
        ),
        None => "<div class=\"placeholder\">⚽</div>".to_string(),
    };

    let stock_badge = match card.tier {
        StockTier::OutOfStock => "<span class=\"badge badge-out\">Stok Habis</span>",
        StockTier::Limited => "<span class=\"badge badge-limited\">Stok Terbatas</span>",
        StockTier::InStock => "",
    };

    let stock_class = if card.total_stock > 0 {
        "stock-in"
    } else {
        "stock-out"
    };

    let sizes: String = card
        .sizes
        .iter()
        .map(|badge| {
            let class = if badge.in_stock { "size size-in" } else { "size size-out" };
            format!("<span class=\"{class}\">{}</span>", escape(&badge.label))
        })
        .collect();

    format!(
        "<a class=\"product-card\" href=\"{LISTING_PATH}/{slug}\">\
<div class=\"product-media\">\
{media}\
<span class=\"badge badge-category\">{category}</span>\
{stock_badge}\
</div>\
<div class=\"product-body\">\
<h3>{name}</h3>\
<div class=\"product-meta\"><span>⚽ {club}</span> &bull; <span>📅 {season}</span></div>\
<div class=\"price-row\">\
<div><p>Harga</p><p class=\"price\">{price}</p></div>\
<div><p>Stok</p><p class=\"{stock_class}\">{total}</p></div>\
</div>\
<p>Ukuran Tersedia</p>\
<div class=\"sizes\">{sizes}</div>\
<p>Lihat Detail &rarr;</p>\
</div>\
</a>",
        slug = escape(&encode(&card.slug)),
        category = escape(&card.category_name),
        name = escape(&card.name),
        club = escape(&card.club),
        season = escape(&card.season),
        price = escape(&card.price_label),
        total = card.total_stock,
    )
}
