//! English strings.

pub(super) const STRINGS: &[(&str, &str)] = &[
    ("language", "Language"),
    ("english", "English"),
    ("russian", "Russian"),
    ("home", "Home"),
    ("catalog", "Catalog"),
    ("cart", "Cart"),
    ("account", "Account"),
    ("furnitureStore", "Furniture Store"),
    ("discoverFurniture", "Discover beautiful furniture for your home"),
    ("specialOffers", "Special Offers"),
    ("popularItems", "Popular Items"),
    ("topRated", "Top Rated"),
    ("filter", "Filter"),
    ("sort", "Sort"),
    ("priceRange", "Price Range"),
    ("productType", "Product Type"),
    ("minimumRating", "Minimum Rating"),
    ("reset", "Reset"),
    ("applyFilters", "Apply Filters"),
    ("sortBy", "Sort By"),
    ("priceLowToHigh", "Price: Low to High"),
    ("priceHighToLow", "Price: High to Low"),
    ("popularity", "Popularity"),
    ("rating", "Rating"),
    ("apply", "Apply"),
    ("noProductsFound", "No products found"),
    ("adjustFilters", "Try adjusting your filters or search query"),
    ("clearFilters", "Clear Filters"),
    ("searchProducts", "Search products..."),
    ("addToCart", "Add to Cart"),
    ("description", "Description"),
    ("details", "Details"),
    ("category", "Category"),
    ("availability", "Availability"),
    ("inStock", "In Stock"),
    ("outOfStock", "Out of Stock"),
    ("addedToCart", "added to cart"),
    ("yourCartIsEmpty", "Your cart is empty"),
    ("addProductsToCart", "Add some products to your cart to see them here"),
    ("continueShopping", "Continue Shopping"),
    ("subtotal", "Subtotal"),
    ("shipping", "Shipping"),
    ("free", "Free"),
    ("total", "Total"),
    ("checkout", "Checkout"),
    ("loginToCheckout", "Login to Checkout"),
    ("orderPlacedSuccess", "Order placed successfully!"),
    ("paymentFailed", "Failed to process payment. Please try again."),
    ("pleaseLogin", "Please log in to complete your purchase"),
    ("welcomeBack", "Welcome Back"),
    ("createAccount", "Create Account"),
    ("signInAccess", "Sign in to access your account"),
    ("fillDetails", "Fill in your details to get started"),
    ("name", "Name"),
    ("yourName", "Your name"),
    ("email", "Email"),
    ("emailPlaceholder", "your.email@example.com"),
    ("password", "Password"),
    ("yourPassword", "Your password"),
    ("confirmPassword", "Confirm Password"),
    ("confirmYourPassword", "Confirm your password"),
    ("signIn", "Sign In"),
    ("signUp", "Sign Up"),
    ("dontHaveAccount", "Don't have an account?"),
    ("alreadyHaveAccount", "Already have an account?"),
    ("demoCredentials", "Demo credentials: user@example.com / password"),
    ("accountInformation", "Account Information"),
    ("orderHistory", "Order History"),
    ("items", "items"),
    ("logOut", "Log Out"),
    ("loggedOut", "You have been logged out"),
    ("invalidCredentials", "Invalid email or password"),
    ("emailInUse", "Email already in use"),
    ("passwordsNotMatch", "Passwords do not match"),
    ("pleaseEnterEmail", "Please enter your email"),
    ("pleaseEnterPassword", "Please enter your password"),
    ("pleaseEnterName", "Please enter your name"),
    ("order", "Order"),
    ("invalidEmail", "Please enter a valid email address"),
    ("loginFailed", "Login failed. Please try again."),
    ("registrationFailed", "Registration failed. Please try again."),
    ("somethingWentWrong", "Something went wrong. Please try again."),
];
