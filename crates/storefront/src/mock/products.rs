//! Static product catalog.

use hearthwood_core::Category;

/// Raw catalog entry; converted into a validated `Product` at load time.
pub(super) struct ProductSeed {
    pub id: &'static str,
    pub name: &'static str,
    pub price: i64,
    pub original_price: Option<i64>,
    pub category: Category,
    pub rating: f32,
    pub image_url: &'static str,
    pub purchase_count: u32,
    pub description: &'static str,
    pub in_stock: bool,
}

pub(super) const PRODUCTS: [ProductSeed; 12] = [
    ProductSeed {
        id: "1",
        name: "Modern Leather Sofa",
        price: 1299,
        original_price: None,
        category: Category::Sofas,
        rating: 4.8,
        image_url: "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=1770&q=80",
        purchase_count: 124,
        description: "This modern leather sofa combines comfort and style with premium materials. Perfect for contemporary living rooms and offices.",
        in_stock: true,
    },
    ProductSeed {
        id: "2",
        name: "Scandinavian Dining Table",
        price: 849,
        original_price: Some(999),
        category: Category::Tables,
        rating: 4.6,
        image_url: "https://images.unsplash.com/photo-1577140917170-285929fb55b7?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=1770&q=80",
        purchase_count: 87,
        description: "Minimalist Scandinavian design dining table made from solid oak. Seats up to 6 people comfortably.",
        in_stock: true,
    },
    ProductSeed {
        id: "3",
        name: "Ergonomic Office Chair",
        price: 349,
        original_price: Some(429),
        category: Category::Chairs,
        rating: 4.7,
        image_url: "https://images.unsplash.com/photo-1580480055273-228ff5388ef8?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=1000&q=80",
        purchase_count: 215,
        description: "Ergonomic office chair with adjustable height, lumbar support, and breathable mesh back. Designed for long hours of comfortable sitting.",
        in_stock: true,
    },
    ProductSeed {
        id: "4",
        name: "King Size Platform Bed",
        price: 899,
        original_price: None,
        category: Category::Beds,
        rating: 4.5,
        image_url: "https://images.unsplash.com/photo-1505693416388-ac5ce068fe85?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=1770&q=80",
        purchase_count: 63,
        description: "Modern king size platform bed with wooden frame and upholstered headboard. No box spring needed.",
        in_stock: true,
    },
    ProductSeed {
        id: "5",
        name: "Minimalist Bookshelf",
        price: 299,
        original_price: Some(349),
        category: Category::Bookshelves,
        rating: 4.3,
        image_url: "https://images.unsplash.com/photo-1594620302200-9a762244a156?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=1769&q=80",
        purchase_count: 92,
        description: "Minimalist 5-tier bookshelf with metal frame and wooden shelves. Perfect for displaying books and decorative items.",
        in_stock: true,
    },
    ProductSeed {
        id: "6",
        name: "Velvet Accent Chair",
        price: 449,
        original_price: None,
        category: Category::Chairs,
        rating: 4.4,
        image_url: "https://images.unsplash.com/photo-1598300042247-d088f8ab3a91?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=1770&q=80",
        purchase_count: 78,
        description: "Luxurious velvet accent chair with gold-finished metal legs. Adds a touch of elegance to any living space.",
        in_stock: true,
    },
    ProductSeed {
        id: "7",
        name: "Glass Coffee Table",
        price: 249,
        original_price: Some(299),
        category: Category::Tables,
        rating: 4.2,
        image_url: "https://images.unsplash.com/photo-1567538096630-e0c55bd6374c?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=1000&q=80",
        purchase_count: 105,
        description: "Modern coffee table with tempered glass top and metal frame. Features a lower shelf for additional storage.",
        in_stock: true,
    },
    ProductSeed {
        id: "8",
        name: "Wooden Wardrobe",
        price: 799,
        original_price: None,
        category: Category::Wardrobes,
        rating: 4.6,
        image_url: "https://images.unsplash.com/photo-1595428774223-ef52624120d2?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=1770&q=80",
        purchase_count: 42,
        description: "Spacious wooden wardrobe with hanging space, shelves, and drawers. Made from sustainable oak with a natural finish.",
        in_stock: true,
    },
    ProductSeed {
        id: "9",
        name: "Pendant Ceiling Light",
        price: 129,
        original_price: Some(159),
        category: Category::Lighting,
        rating: 4.5,
        image_url: "https://images.unsplash.com/photo-1513506003901-1e6a229e2d15?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=1770&q=80",
        purchase_count: 137,
        description: "Modern pendant ceiling light with adjustable height. Perfect for dining areas and kitchen islands.",
        in_stock: true,
    },
    ProductSeed {
        id: "10",
        name: "Standing Desk",
        price: 549,
        original_price: None,
        category: Category::Desks,
        rating: 4.7,
        image_url: "https://images.unsplash.com/photo-1611269154421-4e27233ac5c7?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=1000&q=80",
        purchase_count: 89,
        description: "Electric standing desk with height adjustment. Smooth and quiet motor with memory settings for different heights.",
        in_stock: true,
    },
    ProductSeed {
        id: "11",
        name: "Storage Cabinet",
        price: 399,
        original_price: Some(459),
        category: Category::Cabinets,
        rating: 4.3,
        image_url: "https://images.unsplash.com/photo-1601760561441-16420502c7e0?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=1770&q=80",
        purchase_count: 67,
        description: "Versatile storage cabinet with adjustable shelves and doors. Perfect for living rooms, offices, or bedrooms.",
        in_stock: true,
    },
    ProductSeed {
        id: "12",
        name: "Wall Mirror",
        price: 179,
        original_price: None,
        category: Category::Decor,
        rating: 4.4,
        image_url: "https://images.unsplash.com/photo-1618220252344-8ec99ec624b1?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=1000&q=80",
        purchase_count: 112,
        description: "Round wall mirror with thin metal frame. Adds light and space to any room.",
        in_stock: true,
    },
];
