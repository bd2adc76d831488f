use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryInMemory;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::sale::repository::SaleRepositoryPostgres;

use business::application::cart::add_entry::AddCartEntryUseCaseImpl;
use business::application::cart::checkout::CheckoutCartUseCaseImpl;
use business::application::cart::create::CreateCartUseCaseImpl;
use business::application::cart::get_by_id::GetCartUseCaseImpl;
use business::application::cart::remove_entry::RemoveCartEntryUseCaseImpl;
use business::application::metrics::get_dashboard::GetDashboardMetricsUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::sale::fulfill::FulfillSaleUseCaseImpl;
use business::application::sale::get_all::GetAllSalesUseCaseImpl;
use business::application::sale::get_by_id::GetSaleByIdUseCaseImpl;
use business::application::sale::submit::SubmitSaleUseCaseImpl;

use crate::api::cart::routes::CartApi;
use crate::api::dashboard::routes::DashboardApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::sale::routes::SaleApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub sale_api: SaleApi,
    pub cart_api: CartApi,
    pub dashboard_api: DashboardApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let sale_repository = Arc::new(SaleRepositoryPostgres::new(pool));
        let cart_repository = Arc::new(CartRepositoryInMemory::new());

        // Product use cases
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Sale use cases
        let get_all_sales_use_case = Arc::new(GetAllSalesUseCaseImpl {
            repository: sale_repository.clone(),
            logger: logger.clone(),
        });
        let get_sale_by_id_use_case = Arc::new(GetSaleByIdUseCaseImpl {
            repository: sale_repository.clone(),
            logger: logger.clone(),
        });
        let submit_sale_use_case = Arc::new(SubmitSaleUseCaseImpl {
            repository: sale_repository.clone(),
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let fulfill_sale_use_case = Arc::new(FulfillSaleUseCaseImpl {
            repository: sale_repository.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let create_cart_use_case = Arc::new(CreateCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            repository: cart_repository.clone(),
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let add_cart_entry_use_case = Arc::new(AddCartEntryUseCaseImpl {
            repository: cart_repository.clone(),
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let remove_cart_entry_use_case = Arc::new(RemoveCartEntryUseCaseImpl {
            repository: cart_repository.clone(),
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let checkout_use_case = Arc::new(CheckoutCartUseCaseImpl {
            repository: cart_repository,
            submit_sale: submit_sale_use_case.clone(),
            logger: logger.clone(),
        });

        // Metrics use cases
        let get_dashboard_metrics_use_case = Arc::new(GetDashboardMetricsUseCaseImpl {
            product_repository,
            sale_repository,
            logger,
        });

        let product_api = ProductApi::new(get_all_products_use_case);

        let sale_api = SaleApi::new(
            get_all_sales_use_case,
            get_sale_by_id_use_case,
            submit_sale_use_case,
            fulfill_sale_use_case,
        );

        let cart_api = CartApi::new(
            create_cart_use_case,
            get_cart_use_case,
            add_cart_entry_use_case,
            remove_cart_entry_use_case,
            checkout_use_case,
        );

        let dashboard_api = DashboardApi::new(get_dashboard_metrics_use_case);

        Ok(Self {
            health_api,
            product_api,
            sale_api,
            cart_api,
            dashboard_api,
        })
    }
}
