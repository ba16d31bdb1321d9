//! Response envelopes.
//!
//! Every response body carries a `status` field that mirrors the HTTP status
//! code set on the sink, plus a `statusMsg` and one of `data`, `message` or
//! `message` + `error`.

use serde::Serialize;

use crate::http::ResponseSink;

/// Status codes produced by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpStatus {
    Ok,
    Created,
    NoContent,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    UnprocessableEntity,
    InternalServerError,
}

impl HttpStatus {
    pub fn code(self) -> u16 {
        match self {
            HttpStatus::Ok => 200,
            HttpStatus::Created => 201,
            HttpStatus::NoContent => 204,
            HttpStatus::BadRequest => 400,
            HttpStatus::Unauthorized => 401,
            HttpStatus::Forbidden => 403,
            HttpStatus::NotFound => 404,
            HttpStatus::UnprocessableEntity => 422,
            HttpStatus::InternalServerError => 500,
        }
    }

    /// Value of the envelope's `statusMsg` field.
    pub fn reason(self) -> &'static str {
        match self {
            HttpStatus::Ok => "Success",
            HttpStatus::Created => "Created",
            HttpStatus::NoContent => "No Content",
            HttpStatus::BadRequest => "Bad Request",
            HttpStatus::Unauthorized => "Unauthorized",
            HttpStatus::Forbidden => "Forbidden",
            HttpStatus::NotFound => "Not Found",
            HttpStatus::UnprocessableEntity => "Unprocessable Entity",
            HttpStatus::InternalServerError => "Internal Server Error",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataEnvelope<'a, T: ?Sized> {
    pub status: u16,
    pub status_msg: &'static str,
    pub data: &'a T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEnvelope<'a> {
    pub status: u16,
    pub status_msg: &'static str,
    pub message: &'a str,
}

impl<'a> MessageEnvelope<'a> {
    pub fn new(status: HttpStatus, message: &'a str) -> Self {
        Self {
            status: status.code(),
            status_msg: status.reason(),
            message,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageErrorEnvelope<'a, E: ?Sized> {
    pub status: u16,
    pub status_msg: &'static str,
    pub message: &'a str,
    pub error: &'a E,
}

fn send_data<'r, R, T>(res: &'r mut R, status: HttpStatus, data: &T) -> &'r mut R
where
    R: ResponseSink,
    T: Serialize + ?Sized,
{
    res.set_status(status).write_json(&DataEnvelope {
        status: status.code(),
        status_msg: status.reason(),
        data,
    })
}

fn send_error<'r, R, E>(res: &'r mut R, status: HttpStatus, message: &str, error: &E) -> &'r mut R
where
    R: ResponseSink,
    E: Serialize + ?Sized,
{
    res.set_status(status).write_json(&MessageErrorEnvelope {
        status: status.code(),
        status_msg: status.reason(),
        message,
        error,
    })
}

pub fn ok<'r, R: ResponseSink, T: Serialize + ?Sized>(res: &'r mut R, data: &T) -> &'r mut R {
    send_data(res, HttpStatus::Ok, data)
}

pub fn created<'r, R: ResponseSink, T: Serialize + ?Sized>(res: &'r mut R, data: &T) -> &'r mut R {
    send_data(res, HttpStatus::Created, data)
}

/// Sets 204 and writes no body.
pub fn no_content<R: ResponseSink>(res: &mut R) -> &mut R {
    res.set_status(HttpStatus::NoContent)
}

pub fn bad_request<'r, R: ResponseSink, E: Serialize + ?Sized>(
    res: &'r mut R,
    message: &str,
    error: &E,
) -> &'r mut R {
    send_error(res, HttpStatus::BadRequest, message, error)
}

pub fn not_found<'r, R: ResponseSink>(res: &'r mut R, message: &str) -> &'r mut R {
    let status = HttpStatus::NotFound;
    res.set_status(status)
        .write_json(&MessageEnvelope::new(status, message))
}

pub fn unprocessable_entity<'r, R: ResponseSink, E: Serialize + ?Sized>(
    res: &'r mut R,
    message: &str,
    error: &E,
) -> &'r mut R {
    send_error(res, HttpStatus::UnprocessableEntity, message, error)
}

/// `error` is written as given, without sanitizing.
pub fn internal_server_error<'r, R: ResponseSink, E: Serialize + ?Sized>(
    res: &'r mut R,
    message: &str,
    error: &E,
) -> &'r mut R {
    send_error(res, HttpStatus::InternalServerError, message, error)
}
