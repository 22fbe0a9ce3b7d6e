use actix_web::web;

pub mod comparisons;
pub mod health;
pub mod listings;
pub mod pricing;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check)).service(
        web::scope("/api")
            .service(
                web::scope("/listings")
                    .route("", web::get().to(listings::get_all))
                    .route("/search", web::post().to(listings::search))
                    .route("/{id}", web::get().to(listings::get_by_id))
                    .route("/{id}/quote", web::post().to(pricing::quote_listing)),
            )
            .route("/pricing/quote", web::post().to(pricing::quote))
            .service(
                web::scope("/comparisons")
                    .route("", web::post().to(comparisons::create))
                    .route("/{session_id}", web::get().to(comparisons::get))
                    .route("/{session_id}", web::delete().to(comparisons::clear))
                    .route(
                        "/{session_id}/listings/{listing_id}",
                        web::put().to(comparisons::add_listing),
                    )
                    .route(
                        "/{session_id}/listings/{listing_id}",
                        web::delete().to(comparisons::remove_listing),
                    ),
            ),
    );
}
