pub mod link_request;
