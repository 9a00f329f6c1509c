pub mod api_client;
pub mod error;
pub mod transport;

pub use api_client::ApiClient;
pub use error::{ApiError, Operation};
pub use transport::{FetchTransport, HttpMethod, HttpRequest, HttpResponse, Transport};
