//! Document shell shared by every page: head, navbar, footer.

use axum::http::StatusCode;

use crate::views::html::escape;

/// Browser title for storefront pages.
pub const SITE_TITLE: &str = "Jersey Bola Retro - Koleksi Jersey Klasik";

/// Meta description for storefront pages.
pub const SITE_DESCRIPTION: &str =
    "Toko jersey retro terlengkap dengan koleksi jersey klasik dari berbagai klub dan era";

/// Brand shown in the navbar and footer.
pub const BRAND: &str = "Jersey Bola Retro";

const STYLES: &str = "\
*{box-sizing:border-box}\
body{margin:0;font-family:system-ui,sans-serif;color:#111827;background:#f9fafb;display:flex;flex-direction:column;min-height:100vh}\
main{flex-grow:1}\
a{color:inherit;text-decoration:none}\
.navbar,.footer{background:#1e3a8a;color:#fff;padding:16px 32px}\
.navbar{display:flex;justify-content:space-between;align-items:center}\
.brand{font-weight:800;font-size:1.25rem}\
.container{max-width:80rem;margin:0 auto;padding:48px 24px}\
.listing-header{display:flex;justify-content:space-between;align-items:center;margin-bottom:24px}\
.product-count{font-size:1.875rem;font-weight:700;color:#2563eb}\
.filters{background:#fff;border:1px solid #e5e7eb;border-radius:12px;padding:16px;margin-bottom:40px;display:flex;flex-wrap:wrap;gap:8px;align-items:center}\
.filter-link{padding:8px 20px;border-radius:8px;background:#f3f4f6;color:#374151;font-weight:500}\
.filter-link.is-active{background:#2563eb;color:#fff}\
.product-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(18rem,1fr));gap:32px}\
.product-card{display:block;background:#fff;border-radius:16px;overflow:hidden;box-shadow:0 10px 15px rgba(0,0,0,.1)}\
.product-media{position:relative;height:18rem;background:#e5e7eb}\
.product-media img{width:100%;height:100%;object-fit:cover}\
.placeholder{display:flex;align-items:center;justify-content:center;height:100%;font-size:3.75rem;color:#d1d5db}\
.badge{position:absolute;top:12px;padding:6px 16px;border-radius:9999px;font-size:.75rem;font-weight:700}\
.badge-category{right:12px;background:rgba(255,255,255,.95);color:#1f2937}\
.badge-out{left:12px;background:#ef4444;color:#fff}\
.badge-limited{left:12px;background:#f97316;color:#fff}\
.product-body{padding:20px}\
.product-meta{color:#4b5563;font-size:.875rem;margin-bottom:16px}\
.price-row{display:flex;justify-content:space-between;align-items:flex-end;border-bottom:1px solid #f3f4f6;padding-bottom:16px;margin-bottom:16px}\
.price{font-size:1.5rem;font-weight:800;color:#2563eb}\
.stock-in{color:#16a34a;font-weight:700}\
.stock-out{color:#dc2626;font-weight:700}\
.sizes{display:flex;flex-wrap:wrap;gap:6px}\
.size{font-size:.75rem;font-weight:700;padding:6px 12px;border-radius:8px;border:2px solid}\
.size-in{background:#f0fdf4;border-color:#22c55e;color:#15803d}\
.size-out{background:#f9fafb;border-color:#d1d5db;color:#9ca3af;text-decoration:line-through}\
.empty-state{text-align:center;padding:80px 0;background:#fff;border-radius:16px}\
.empty-state button{background:#2563eb;color:#fff;border:0;padding:12px 32px;border-radius:8px;font-weight:600;cursor:pointer}\
.error-page{text-align:center;padding:80px 0}";

/// Wrap page content in the full document shell.
pub fn render_document(title: &str, main: &str) -> String {
    format!(
        "<!DOCTYPE html>\
<html lang=\"id\">\
<head>\
<meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<meta name=\"description\" content=\"{description}\">\
<title>{title}</title>\
<style>{STYLES}</style>\
</head>\
<body>\
{navbar}\
<main>{main}</main>\
{footer}\
</body>\
</html>",
        description = escape(SITE_DESCRIPTION),
        title = escape(title),
        navbar = render_navbar(),
        footer = render_footer(),
    )
}

fn render_navbar() -> String {
    format!(
        "<nav class=\"navbar\">\
<a class=\"brand\" href=\"/products\">{BRAND}</a>\
<a href=\"/products\">Produk</a>\
</nav>"
    )
}

fn render_footer() -> String {
    format!("<footer class=\"footer\"><p>{BRAND} &middot; Koleksi jersey klasik</p></footer>")
}

/// Full error document for a failed page request.
pub fn render_error_page(status: StatusCode) -> String {
    let heading = if status.is_server_error() {
        "Terjadi kesalahan saat memuat halaman."
    } else {
        "Permintaan tidak dapat diproses."
    };
    let main = format!(
        "<div class=\"container error-page\">\
<h1>{code}</h1>\
<p>{heading}</p>\
<a class=\"filter-link\" href=\"/products\">Kembali ke produk</a>\
</div>",
        code = status.as_u16(),
    );
    render_document(SITE_TITLE, &main)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_has_indonesian_shell() {
        let doc = render_document(SITE_TITLE, "<p>isi</p>");
        assert!(doc.starts_with("<!DOCTYPE html><html lang=\"id\">"));
        assert!(doc.contains("<title>Jersey Bola Retro - Koleksi Jersey Klasik</title>"));
        assert!(doc.contains("<main><p>isi</p></main>"));
        assert!(doc.contains("class=\"navbar\""));
        assert!(doc.contains("class=\"footer\""));
    }

    #[test]
    fn title_is_escaped() {
        let doc = render_document("<script>", "");
        assert!(doc.contains("<title>&lt;script&gt;</title>"));
    }

    #[test]
    fn error_page_shows_status_code() {
        let doc = render_error_page(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(doc.contains("<h1>500</h1>"));
        assert!(doc.contains("Terjadi kesalahan"));
    }
}
