use common::Category;
use frontend::{ApiClient, ChatView, CustomerView, DashboardView, ProductView};

pub async fn dashboard(client: ApiClient) {
    let mut view = DashboardView::new(client);
    if let Some(notice) = view.load().await {
        println!("{}", notice);
        return;
    }

    println!("  Total users:    {}", view.total_users.unwrap_or_default());
    println!("  Total products: {}", view.total_products.unwrap_or_default());
}

pub async fn products(client: ApiClient, search: &str, category: Option<Category>) {
    let mut view = ProductView::new(client);
    if let Some(notice) = view.load().await {
        println!("{}", notice);
        return;
    }

    view.set_search_query(search);
    view.set_category(category);

    println!(
        "  Showing {} of {} products (search: {:?}, category: {})",
        view.filtered().len(),
        view.products().len(),
        view.search_query(),
        view.selected_category().map_or("All", |c| c.as_str()),
    );
    println!();
    println!("  {:<24} {:>8}  {:<12} {}", "Name", "Price", "Category", "Description");

    for product in view.filtered() {
        let image = if product.image.is_some() { " 🖼" } else { "" };
        println!(
            "  {:<24} {:>8}  {:<12} {}{}",
            product.name, product.price, product.category, product.description, image
        );
    }
}

pub async fn customers(client: ApiClient) {
    let mut view = CustomerView::new(client);
    if let Some(notice) = view.load().await {
        println!("{}", notice);
        return;
    }

    println!("  {:<16} {:<16} {:<8} {}", "First Name", "Last Name", "Gender", "Address");
    for profile in view.profiles() {
        println!(
            "  {:<16} {:<16} {:<8} {}",
            profile.first_name, profile.last_name, profile.gender, profile.address
        );
    }
}

pub fn chat() {
    let view = ChatView::new();

    for name in ChatView::CORRESPONDENTS {
        let marker = if name == view.selected() { "▶" } else { " " };
        println!("  {} {}", marker, name);
    }
    println!();

    for message in view.messages() {
        println!("  {}: {}", message.sender, message.text);
    }
}
