use shopping_cart_cli::models::cart::ShoppingCart;
use shopping_cart_cli::models::coupon::Coupon;
use shopping_cart_cli::models::product::Product;

#[test]
fn test_calculating_total_price() {
    // Given
    let mut cart = ShoppingCart::new();
    assert_eq!(cart.total_price(), 0.0);

    // When
    cart.add(Product::new("Book", 20.0));
    cart.add(Product::new("Movie", 15.0));

    // Then
    assert_eq!(cart.total_price(), 35.0);
}

#[test]
fn test_removing_product() {
    // Given
    let mut cart = ShoppingCart::new();
    let book = Product::new("Book", 20.0);
    let movie = Product::new("Movie", 15.0);
    cart.add(book.clone());
    cart.add(movie.clone());
    assert_eq!(cart.total_price(), 35.0);

    // When
    cart.remove(&book);

    // Then
    assert_eq!(cart.total_price(), 15.0);
}

#[test]
fn test_removing_absent_product_is_a_noop() {
    let mut cart = ShoppingCart::new();
    cart.add(Product::new("Book", 20.0));

    cart.remove(&Product::new("Movie", 15.0));
    // Same name but different price: still no match
    cart.remove(&Product::new("Book", 19.0));

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.total_price(), 20.0);
}

#[test]
fn test_remove_takes_only_the_first_duplicate() {
    let mut cart = ShoppingCart::new();
    let book = Product::new("Book", 20.0);
    cart.add(book.clone());
    cart.add(Product::new("Movie", 15.0));
    cart.add(book.clone());

    cart.remove(&book);

    assert_eq!(cart.len(), 2);
    assert_eq!(cart.total_price(), 35.0);
    // The movie kept its place ahead of the remaining book
    assert_eq!(cart.products()[0].name, "Movie");
    assert_eq!(cart.products()[1].name, "Book");
}

#[test]
fn test_duplicates_count_towards_the_total() {
    let mut cart = ShoppingCart::new();
    let book = Product::new("Book", 20.0);
    cart.add(book.clone());
    cart.add(book);

    assert_eq!(cart.len(), 2);
    assert_eq!(cart.total_price(), 40.0);
}

#[test]
fn test_insertion_order_is_preserved() {
    let mut cart = ShoppingCart::new();
    cart.add(Product::new("Book", 20.0));
    cart.add(Product::new("Movie", 15.0));
    cart.add(Product::new("Album", 10.0));

    let names: Vec<&str> = cart.products().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Book", "Movie", "Album"]);
}

#[test]
fn test_cart_stores_an_independent_copy() {
    // Given
    let mut cart = ShoppingCart::new();
    let mut book = Product::new("Book", 25.0);
    cart.add(book.clone());

    // When: discounting the original after insertion
    book.apply(&Coupon::new("Holiday Sale", 20.0));

    // Then: the stored copy is untouched
    assert_eq!(book.price, 20.0);
    assert_eq!(cart.total_price(), 25.0);
}

#[test]
fn test_discount_before_insertion_is_reflected_in_the_total() {
    let mut cart = ShoppingCart::new();
    let mut book = Product::new("Book", 25.0);
    book.apply(&Coupon::new("Holiday Sale", 20.0));

    cart.add(book);

    assert_eq!(cart.total_price(), 20.0);
}

#[test]
fn test_clear_empties_the_cart() {
    let mut cart = ShoppingCart::new();
    cart.add(Product::new("Book", 20.0));
    cart.add(Product::new("Movie", 15.0));
    assert!(!cart.is_empty());

    cart.clear();

    assert!(cart.is_empty());
    assert_eq!(cart.total_price(), 0.0);
}
