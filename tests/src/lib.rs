#![cfg(test)]

mod comment_form;
mod http;
