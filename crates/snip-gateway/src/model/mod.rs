mod url;

pub use url::{
    CreateShortLinkRequest, CreateShortLinkResponse, ErrorResponse, ExistsResponse,
    HealthResponse,
};
