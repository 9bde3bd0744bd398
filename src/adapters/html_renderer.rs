use crate::domain::model::Product;
use crate::domain::ports::{Renderer, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The first few cards sit above the fold, so their images load eagerly;
/// everything below defers to lazy loading.
const EAGER_IMAGE_COUNT: usize = 3;

const OUTPUT_FILE: &str = "index.html";

/// Renders the product list into a static HTML page and writes it through
/// the storage port.
pub struct HtmlRenderer<S: Storage> {
    storage: S,
    output_dir: String,
}

impl<S: Storage> HtmlRenderer<S> {
    pub fn new(storage: S, output_dir: String) -> Self {
        Self {
            storage,
            output_dir,
        }
    }

    fn build_page(products: &[Product]) -> String {
        let mut page = String::new();
        page.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        page.push_str("<meta charset=\"utf-8\">\n<title>All products</title>\n");
        page.push_str("</head>\n<body>\n");
        page.push_str("<section id=\"all-products\">\n<div class=\"container\">\n");

        for (index, product) in products.iter().enumerate() {
            page.push_str(&Self::product_card(product, index));
        }

        page.push_str("</div>\n</section>\n</body>\n</html>\n");
        page
    }

    fn product_card(product: &Product, index: usize) -> String {
        let loading = if index < EAGER_IMAGE_COUNT {
            "eager"
        } else {
            "lazy"
        };
        let title = escape_html(&product.title);
        let category = escape_html(&product.category);
        let image = escape_html(&product.image);

        format!(
            "<div class=\"product\">\n\
             <div class=\"product-picture\">\n\
             <img src=\"{image}\" loading=\"{loading}\" alt=\"product: {title}\" width=\"250\">\n\
             </div>\n\
             <div class=\"product-info\">\n\
             <h5 class=\"categories\">{category}</h5>\n\
             <h4 class=\"title\">{title}</h4>\n\
             <h3 class=\"price\"><span>US$ {price}</span></h3>\n\
             <button>Add to bag</button>\n\
             </div>\n\
             </div>\n",
            price = product.price,
        )
    }
}

#[async_trait]
impl<S: Storage> Renderer for HtmlRenderer<S> {
    async fn render(&self, products: &[Product]) -> Result<String> {
        let output_path = format!("{}/{}", self.output_dir, OUTPUT_FILE);

        tracing::debug!("Rendering {} product cards", products.len());
        let page = Self::build_page(products);

        tracing::debug!("Writing page ({} bytes) to storage", page.len());
        self.storage.write_file(OUTPUT_FILE, page.as_bytes()).await?;

        Ok(output_path)
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ShopfrontError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                ShopfrontError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn product(title: &str, price: f64) -> Product {
        Product {
            title: title.to_string(),
            category: "electronics".to_string(),
            price,
            image: format!("https://img.example/{}.jpg", title),
        }
    }

    async fn rendered_page(products: &[Product]) -> String {
        let storage = MockStorage::new();
        let renderer = HtmlRenderer::new(storage.clone(), "test_output".to_string());

        let path = renderer.render(products).await.unwrap();
        assert_eq!(path, "test_output/index.html");

        let bytes = storage.get_file("index.html").await.unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[tokio::test]
    async fn test_render_writes_all_cards_in_order() {
        let products = vec![product("Alpha", 10.5), product("Beta", 22.0)];
        let page = rendered_page(&products).await;

        let alpha = page.find("Alpha").unwrap();
        let beta = page.find("Beta").unwrap();
        assert!(alpha < beta);
        assert_eq!(page.matches("<div class=\"product\">").count(), 2);
        assert!(page.contains("<h5 class=\"categories\">electronics</h5>"));
        assert!(page.contains("<button>Add to bag</button>"));
    }

    #[tokio::test]
    async fn test_render_price_formatting() {
        let page = rendered_page(&[product("Alpha", 29.99), product("Beta", 79.0)]).await;

        assert!(page.contains("<span>US$ 29.99</span>"));
        // Whole-number prices render without a trailing fraction.
        assert!(page.contains("<span>US$ 79</span>"));
    }

    #[tokio::test]
    async fn test_render_eager_and_lazy_image_split() {
        let products: Vec<Product> = (0..5).map(|i| product(&format!("P{}", i), 1.0)).collect();
        let page = rendered_page(&products).await;

        assert_eq!(page.matches("loading=\"eager\"").count(), 3);
        assert_eq!(page.matches("loading=\"lazy\"").count(), 2);
    }

    #[tokio::test]
    async fn test_render_escapes_markup_in_fields() {
        let mut p = product("Cables <deluxe>", 5.0);
        p.category = "a&b".to_string();
        let page = rendered_page(&[p]).await;

        assert!(page.contains("Cables &lt;deluxe&gt;"));
        assert!(page.contains("<h5 class=\"categories\">a&amp;b</h5>"));
        assert!(!page.contains("<deluxe>"));
    }

    #[tokio::test]
    async fn test_render_empty_catalog_writes_empty_container() {
        let page = rendered_page(&[]).await;

        assert!(page.contains("<div class=\"container\">"));
        assert_eq!(page.matches("<div class=\"product\">").count(), 0);
    }

    #[tokio::test]
    async fn test_alt_text_includes_title() {
        let page = rendered_page(&[product("Lamp", 12.0)]).await;
        assert!(page.contains("alt=\"product: Lamp\""));
    }
}
