use crate::modules::completion::handle::*;
use actix_web::web::{ServiceConfig, scope};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(scope("/completions").service(complete_habit).service(list_completions));
}
