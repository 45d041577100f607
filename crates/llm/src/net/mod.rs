pub(crate) mod http_request;
