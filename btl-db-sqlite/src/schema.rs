table! {
    categories (id) {
        id -> BigInt,
        name -> Text,
    }
}

table! {
    houses (id) {
        id -> BigInt,
        category_id -> Nullable<BigInt>,
        name -> Text,
        address -> Text,
        description -> Nullable<Text>,
        created_at -> BigInt,
    }
}

table! {
    rooms (id) {
        id -> BigInt,
        house_id -> BigInt,
        name -> Text,
        description -> Nullable<Text>,
        created_at -> BigInt,
    }
}

table! {
    numbers (id) {
        id -> BigInt,
        room_id -> BigInt,
        value -> Text,
    }
}

table! {
    users (id) {
        id -> BigInt,
        username -> Text,
        password -> Text,
        first_name -> Text,
        last_name -> Text,
        email -> Nullable<Text>,
        avatar -> Nullable<Text>,
        date_joined -> BigInt,
    }
}

table! {
    comments (id) {
        id -> BigInt,
        room_id -> BigInt,
        user_id -> BigInt,
        content -> Text,
        created_at -> BigInt,
        updated_at -> Nullable<BigInt>,
    }
}

table! {
    likes (id) {
        id -> BigInt,
        room_id -> BigInt,
        user_id -> BigInt,
        liked -> Bool,
    }
}

joinable!(houses -> categories (category_id));
joinable!(rooms -> houses (house_id));
joinable!(numbers -> rooms (room_id));
joinable!(comments -> rooms (room_id));
joinable!(comments -> users (user_id));
joinable!(likes -> rooms (room_id));
joinable!(likes -> users (user_id));

allow_tables_to_appear_in_same_query!(categories, houses, rooms, numbers, users, comments, likes,);
