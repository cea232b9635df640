use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        activity::{ActivityDto, ActivityQueryDto, CountDto, PageQueryDto},
        api::{ErrorDto, ReorderDto},
        board::{BoardDetailsDto, BoardDto, CreateBoardDto, UpdateBoardDto, VisibilityDto},
        card::{
            AddCardMemberDto, ArchiveCardDto, BatchAddCardMembersDto, CardDto, CardMemberDto,
            CreateCardDto, DuplicateCardDto, MoveCardDto, UpdateCardDto,
        },
        column::{ColumnDto, CreateColumnDto, DuplicateColumnDto, MoveColumnDto, UpdateColumnDto},
        member::{AddMemberDto, BoardMemberDto, RoleDto, UpdateMemberRoleDto},
        user::UserDto,
    },
    server::{
        controller::{activity, board, card, card_member, column, member, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taskboard API",
        description = "Boards, columns and cards with role-based board membership"
    ),
    paths(
        board::list_boards,
        board::create_board,
        board::get_board,
        board::update_board,
        board::delete_board,
        member::list_members,
        member::add_member,
        member::update_member_role,
        member::remove_member,
        member::leave_board,
        column::list_columns,
        column::create_column,
        column::reorder_columns,
        column::get_column,
        column::update_column,
        column::delete_column,
        column::duplicate_column,
        column::move_column,
        card::list_cards,
        card::create_card,
        card::reorder_cards,
        card::get_card,
        card::update_card,
        card::delete_card,
        card::move_card,
        card::duplicate_card,
        card::archive_card,
        card_member::list_card_members,
        card_member::add_card_member,
        card_member::remove_card_member,
        card_member::batch_add_card_members,
        activity::list_board_activities,
        activity::count_board_activities,
        activity::list_card_activities,
        activity::count_card_activities,
        user::get_current_user,
        user::list_user_activities,
    ),
    components(schemas(
        ErrorDto,
        ReorderDto,
        VisibilityDto,
        BoardDto,
        BoardDetailsDto,
        CreateBoardDto,
        UpdateBoardDto,
        RoleDto,
        BoardMemberDto,
        AddMemberDto,
        UpdateMemberRoleDto,
        ColumnDto,
        CreateColumnDto,
        UpdateColumnDto,
        MoveColumnDto,
        DuplicateColumnDto,
        CardDto,
        CreateCardDto,
        UpdateCardDto,
        MoveCardDto,
        DuplicateCardDto,
        ArchiveCardDto,
        CardMemberDto,
        AddCardMemberDto,
        BatchAddCardMembersDto,
        ActivityDto,
        ActivityQueryDto,
        PageQueryDto,
        CountDto,
        UserDto,
    )),
    tags(
        (name = "board", description = "Board management"),
        (name = "member", description = "Board membership and roles"),
        (name = "column", description = "Columns and column ordering"),
        (name = "card", description = "Cards and card ordering"),
        (name = "card_member", description = "Card assignments"),
        (name = "activity", description = "Board and card activity feeds"),
        (name = "user", description = "The signed-in user"),
    )
)]
pub struct ApiDoc;

/// Builds the API router with Swagger UI served at `/api/docs`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/boards", get(board::list_boards).post(board::create_board))
        .route(
            "/api/boards/{board_id}",
            get(board::get_board)
                .put(board::update_board)
                .delete(board::delete_board),
        )
        .route(
            "/api/boards/{board_id}/members",
            get(member::list_members).post(member::add_member),
        )
        .route(
            "/api/boards/{board_id}/members/{user_id}",
            put(member::update_member_role).delete(member::remove_member),
        )
        .route("/api/boards/{board_id}/leave", post(member::leave_board))
        .route(
            "/api/boards/{board_id}/columns",
            get(column::list_columns).post(column::create_column),
        )
        .route(
            "/api/boards/{board_id}/columns/reorder",
            put(column::reorder_columns),
        )
        .route(
            "/api/columns/{column_id}",
            get(column::get_column)
                .put(column::update_column)
                .delete(column::delete_column),
        )
        .route(
            "/api/columns/{column_id}/duplicate",
            post(column::duplicate_column),
        )
        .route("/api/columns/{column_id}/move", put(column::move_column))
        .route(
            "/api/columns/{column_id}/cards",
            get(card::list_cards).post(card::create_card),
        )
        .route(
            "/api/columns/{column_id}/cards/reorder",
            put(card::reorder_cards),
        )
        .route(
            "/api/cards/{card_id}",
            get(card::get_card)
                .put(card::update_card)
                .delete(card::delete_card),
        )
        .route("/api/cards/{card_id}/move", put(card::move_card))
        .route("/api/cards/{card_id}/duplicate", post(card::duplicate_card))
        .route("/api/cards/{card_id}/archive", put(card::archive_card))
        .route(
            "/api/cards/{card_id}/members",
            get(card_member::list_card_members).post(card_member::add_card_member),
        )
        .route(
            "/api/cards/{card_id}/members/batch",
            post(card_member::batch_add_card_members),
        )
        .route(
            "/api/cards/{card_id}/members/{user_id}",
            delete(card_member::remove_card_member),
        )
        .route(
            "/api/boards/{board_id}/activities",
            get(activity::list_board_activities),
        )
        .route(
            "/api/boards/{board_id}/activities/count",
            get(activity::count_board_activities),
        )
        .route(
            "/api/cards/{card_id}/activities",
            get(activity::list_card_activities),
        )
        .route(
            "/api/cards/{card_id}/activities/count",
            get(activity::count_card_activities),
        )
        .route("/api/users/me", get(user::get_current_user))
        .route(
            "/api/users/{user_id}/activities",
            get(user::list_user_activities),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/api/boards",
            "/api/boards/{board_id}",
            "/api/boards/{board_id}/members/{user_id}",
            "/api/boards/{board_id}/leave",
            "/api/boards/{board_id}/columns/reorder",
            "/api/columns/{column_id}/move",
            "/api/columns/{column_id}/cards/reorder",
            "/api/cards/{card_id}/archive",
            "/api/cards/{card_id}/members/{user_id}",
            "/api/cards/{card_id}/members/batch",
            "/api/boards/{board_id}/activities",
            "/api/cards/{card_id}/activities/count",
            "/api/users/me",
            "/api/users/{user_id}/activities",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }
}
