use actix_web::web;

use crate::handlers::{employees, home::home, system, users};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api")
            .service(system::health_check)
            .service(users::new_users)
            .service(users::all_users)
            .service(employees::list_employees)
            .service(employees::add_employee)
            .service(employees::delete_employee),
    );
}
