diesel::table! {
    products (id) {
        id -> Text,
        name -> Text,
        price -> BigInt,
        description -> Text,
        category -> Text,
        image -> Nullable<Text>,       // base64 payload
    }
}

diesel::table! {
    profiles (id) {
        id -> Text,
        first_name -> Text,
        last_name -> Text,
        gender -> Text,
        address -> Text,
        profile_image -> Nullable<Text>,
    }
}

diesel::table! {
    users (id) {
        id -> Text,
        name -> Text,
        email -> Text,                 // unique
        password_hash -> Text,
    }
}
