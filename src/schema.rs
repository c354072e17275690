diesel::table! {
    budgets (id) {
        id -> Text,
        user_id -> Text,
        category_id -> Nullable<Text>,
        amount -> Text,
        month -> Nullable<Text>,
        period_type -> Text,
        period_start_day -> Nullable<Integer>,
        is_active -> Bool,
        description -> Nullable<Text>,
        created_at -> Timestamp,
    }
}

diesel::table! {
    transactions (id) {
        id -> Text,
        user_id -> Text,
        category_id -> Nullable<Text>,
        amount -> Text,
        kind -> Text,
        transaction_date -> Text,
        description -> Nullable<Text>,
        currency -> Text,
        created_at -> Timestamp,
    }
}

diesel::table! {
    notifications (id) {
        id -> Text,
        user_id -> Text,
        title -> Text,
        message -> Text,
        category -> Text,
        priority -> Text,
        action_url -> Nullable<Text>,
        payload -> Nullable<Text>,
        source_budget_id -> Nullable<Text>,
        is_read -> Bool,
        created_at -> Timestamp,
    }
}

diesel::allow_tables_to_appear_in_same_query!(budgets, transactions, notifications,);
