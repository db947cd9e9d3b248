use crate::modules::habit::handle::*;
use actix_web::web::{ServiceConfig, scope};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/habits")
            .service(create_habit)
            .service(list_habits)
            .service(get_habit)
            .service(update_habit)
            .service(delete_habit),
    );
}
