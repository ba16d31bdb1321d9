//! Terminal error handler.
//!
//! Any error a controller returns ends up here. The error's kind selects the
//! response; kinds without a dedicated arm get the default 500 response.

use tracing::{error, warn};

use crate::error::{Error, ErrorKind};
use crate::http::ResponseSink;
use crate::response;

const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";
const INVALID_BODY_MESSAGE: &str = "Invalid request body";

pub fn handle_error<'r, R: ResponseSink>(res: &'r mut R, err: &Error) -> &'r mut R {
    match err.kind() {
        ErrorKind::InvalidBody => {
            warn!(error = %err, "Rejected request body");
            response::bad_request(res, INVALID_BODY_MESSAGE, err)
        }
        ErrorKind::NotFound => {
            warn!(error = %err, "Resource not found");
            let Error::NotFound(message) = err else {
                return default_error(res, err);
            };
            response::not_found(res, message)
        }
        _ => default_error(res, err),
    }
}

fn default_error<'r, R: ResponseSink>(res: &'r mut R, err: &Error) -> &'r mut R {
    error!(error = %err, kind = err.kind().name(), "Request failed");
    response::internal_server_error(res, INTERNAL_SERVER_ERROR_MESSAGE, err)
}
