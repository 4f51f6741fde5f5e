//! Russian strings.

pub(super) const STRINGS: &[(&str, &str)] = &[
    ("language", "Язык"),
    ("english", "Английский"),
    ("russian", "Русский"),
    ("home", "Главная"),
    ("catalog", "Каталог"),
    ("cart", "Корзина"),
    ("account", "Аккаунт"),
    ("furnitureStore", "Мебельный Магазин"),
    ("discoverFurniture", "Откройте для себя красивую мебель для вашего дома"),
    ("specialOffers", "Специальные предложения"),
    ("popularItems", "Популярные товары"),
    ("topRated", "Лучшие по рейтингу"),
    ("filter", "Фильтр"),
    ("sort", "Сортировка"),
    ("priceRange", "Диапазон цен"),
    ("productType", "Тип товара"),
    ("minimumRating", "Минимальный рейтинг"),
    ("reset", "Сбросить"),
    ("applyFilters", "Применить фильтры"),
    ("sortBy", "Сортировать по"),
    ("priceLowToHigh", "Цена: от низкой к высокой"),
    ("priceHighToLow", "Цена: от высокой к низкой"),
    ("popularity", "Популярность"),
    ("rating", "Рейтинг"),
    ("apply", "Применить"),
    ("noProductsFound", "Товары не найдены"),
    ("adjustFilters", "Попробуйте изменить фильтры или поисковый запрос"),
    ("clearFilters", "Очистить фильтры"),
    ("searchProducts", "Поиск товаров..."),
    ("addToCart", "Добавить в корзину"),
    ("description", "Описание"),
    ("details", "Детали"),
    ("category", "Категория"),
    ("availability", "Наличие"),
    ("inStock", "В наличии"),
    ("outOfStock", "Нет в наличии"),
    ("addedToCart", "добавлен в корзину"),
    ("yourCartIsEmpty", "Ваша корзина пуста"),
    ("addProductsToCart", "Добавьте товары в корзину, чтобы увидеть их здесь"),
    ("continueShopping", "Продолжить покупки"),
    ("subtotal", "Подытог"),
    ("shipping", "Доставка"),
    ("free", "Бесплатно"),
    ("total", "Итого"),
    ("checkout", "Оформить заказ"),
    ("loginToCheckout", "Войдите для оформления"),
    ("orderPlacedSuccess", "Заказ успешно размещен!"),
    ("paymentFailed", "Не удалось обработать платеж. Пожалуйста, попробуйте снова."),
    ("pleaseLogin", "Пожалуйста, войдите, чтобы завершить покупку"),
    ("welcomeBack", "С возвращением"),
    ("createAccount", "Создать аккаунт"),
    ("signInAccess", "Войдите, чтобы получить доступ к вашему аккаунту"),
    ("fillDetails", "Заполните данные, чтобы начать"),
    ("name", "Имя"),
    ("yourName", "Ваше имя"),
    ("email", "Email"),
    ("emailPlaceholder", "ваш.email@example.com"),
    ("password", "Пароль"),
    ("yourPassword", "Ваш пароль"),
    ("confirmPassword", "Подтвердите пароль"),
    ("confirmYourPassword", "Подтвердите ваш пароль"),
    ("signIn", "Войти"),
    ("signUp", "Зарегистрироваться"),
    ("dontHaveAccount", "Нет аккаунта?"),
    ("alreadyHaveAccount", "Уже есть аккаунт?"),
    ("demoCredentials", "Демо-данные: user@example.com / password"),
    ("accountInformation", "Информация об аккаунте"),
    ("orderHistory", "История заказов"),
    ("items", "товаров"),
    ("logOut", "Выйти"),
    ("loggedOut", "Вы вышли из системы"),
    ("invalidCredentials", "Неверный email или пароль"),
    ("emailInUse", "Email уже используется"),
    ("passwordsNotMatch", "Пароли не совпадают"),
    ("pleaseEnterEmail", "Пожалуйста, введите ваш email"),
    ("pleaseEnterPassword", "Пожалуйста, введите ваш пароль"),
    ("pleaseEnterName", "Пожалуйста, введите ваше имя"),
    ("order", "Заказ"),
    ("invalidEmail", "Пожалуйста, введите корректный email"),
    ("loginFailed", "Не удалось войти. Пожалуйста, попробуйте снова."),
    ("registrationFailed", "Не удалось зарегистрироваться. Пожалуйста, попробуйте снова."),
    ("somethingWentWrong", "Что-то пошло не так. Пожалуйста, попробуйте снова."),
];
