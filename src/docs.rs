use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::genre::handler::genre_list,
        crate::modules::genre::handler::genre_detail,
        crate::modules::genre::handler::genre_create_form,
        crate::modules::genre::handler::genre_create,
        crate::modules::genre::handler::genre_delete_form,
        crate::modules::genre::handler::genre_delete,
        crate::modules::genre::handler::genre_update_form,
        crate::modules::genre::handler::genre_update,
    ),
    components(
        schemas(
            crate::modules::genre::dto::GenreForm,
            crate::modules::genre::dto::DeleteGenreForm,
            crate::modules::genre::model::Genre,
            crate::modules::book::model::Book,
        )
    ),
    tags(
        (name = "Genre", description = "Catalog genre pages")
    )
)]
pub struct ApiDoc;
