//! Pre-built front-end bundle. Directory requests, `GET /` included, serve `index.html`.

use std::path::Path;
use tower_http::services::ServeDir;

pub fn static_files(dir: &Path) -> ServeDir {
    ServeDir::new(dir).append_index_html_on_directories(true)
}
