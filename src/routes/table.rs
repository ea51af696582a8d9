use std::net::SocketAddr;

use crate::assets::AssetStore;
use crate::http::parser::parse_http_request;
use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::routes::pages;

/// What a matched route does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handler {
    /// Look up the image named in a urlencoded body and embed it in a page
    FindImage,
    /// Serve a file from the asset root as is
    StaticFile {
        file: &'static str,
        content_type: &'static str,
    },
    /// 307 to an external location
    Redirect { location: &'static str },
}

#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub method: Method,
    /// Exact paths this entry answers to; no normalization is applied
    pub paths: &'static [&'static str],
    pub handler: Handler,
}

impl RouteEntry {
    pub fn matches(&self, method: Method, path: &str) -> bool {
        self.method == method && self.paths.iter().any(|p| *p == path)
    }
}

pub struct Router {
    routes: Vec<RouteEntry>,
    assets: AssetStore,
}

impl Router {
    /// An empty table; every request gets the 404 page.
    pub fn new(assets: AssetStore) -> Self {
        Self {
            routes: Vec::new(),
            assets,
        }
    }

    pub fn route(
        mut self,
        method: Method,
        paths: &'static [&'static str],
        handler: Handler,
    ) -> Self {
        self.routes.push(RouteEntry {
            method,
            paths,
            handler,
        });
        self
    }

    fn static_file(
        self,
        paths: &'static [&'static str],
        file: &'static str,
        content_type: &'static str,
    ) -> Self {
        self.route(Method::GET, paths, Handler::StaticFile { file, content_type })
    }

    /// The campus site's fixed table.
    pub fn campus(assets: AssetStore) -> Self {
        Self::new(assets)
            .route(Method::POST, &["/find-image"], Handler::FindImage)
            .static_file(
                &["/", "/en", "/index.html", "/main_en.html"],
                "main_en.html",
                "text/html",
            )
            .static_file(&["/ar", "/main_ar.html"], "main_ar.html", "text/html")
            .static_file(&["/style.css", "/.css"], "style.css", "text/css")
            .static_file(&["/bzu-logo.png", "/.png"], "bzu-logo.png", "image/png")
            .static_file(
                &["/Birzeit-University-campus.jpg", "/.jpg"],
                "Birzeit-University-campus.jpg",
                "image/jpeg",
            )
            .route(
                Method::GET,
                &["/itc"],
                Handler::Redirect {
                    location: "https://itc.birzeit.edu",
                },
            )
            .route(
                Method::GET,
                &["/so"],
                Handler::Redirect {
                    location: "https://stackoverflow.com",
                },
            )
            .static_file(
                &["/myform.html", "/myform", "/form", "/.html"],
                "myform.html",
                "text/html",
            )
    }

    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }

    /// First entry answering `method` + `path`.
    pub fn lookup(&self, method: Method, path: &str) -> Option<&RouteEntry> {
        self.routes.iter().find(|r| r.matches(method, path))
    }

    /// Turns the raw bytes of one request into its response.
    ///
    /// Never fails: unparseable input is answered with the 404 page.
    pub async fn dispatch(&self, raw: &[u8], peer: SocketAddr) -> Response {
        match parse_http_request(raw) {
            Ok(request) => self.handle(&request, peer).await,
            Err(e) => {
                tracing::warn!(%peer, error = %e, "unparseable request");
                pages::not_found(peer)
            }
        }
    }

    pub async fn handle(&self, request: &Request, peer: SocketAddr) -> Response {
        let Some(entry) = self.lookup(request.method, &request.path) else {
            return pages::not_found(peer);
        };

        match &entry.handler {
            Handler::FindImage => self.find_image(request, peer).await,
            Handler::StaticFile { file, content_type } => {
                match self.assets.read(file).await {
                    Ok(bytes) => Response::content(bytes, content_type),
                    Err(e) => {
                        tracing::warn!(file, error = %e, "static asset unavailable");
                        pages::not_found(peer)
                    }
                }
            }
            Handler::Redirect { location } => Response::redirect(location),
        }
    }

    async fn find_image(&self, request: &Request, peer: SocketAddr) -> Response {
        let form = request.form();
        let name = match form.first_value() {
            Some(name) if !name.is_empty() => name,
            _ => {
                tracing::debug!(%peer, "find-image request without an image name");
                return pages::not_found(peer);
            }
        };

        match self.assets.resolve_image(name).await {
            Some(image) => pages::image_page(&image),
            None => pages::not_found(peer),
        }
    }
}
