use yew::prelude::*;

use crate::components::faq::FaqSection;
use crate::components::inquiry::InquirySection;
use crate::components::notice::NoticeSection;
use crate::components::options::OptionsSection;
use crate::components::packages::PackagesSection;
use crate::components::portfolio::PortfolioSection;
use crate::components::templates::TemplatesSection;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <>
            <header class="siteHeader">
                <h1 class="siteHeader__title">{ "홈페이지 제작 패키지" }</h1>
                <p class="siteHeader__subtitle">{ "시트에서 바로 읽어오는 최신 안내입니다." }</p>
            </header>
            <main class="page">
                <NoticeSection />
                <PackagesSection />
                <OptionsSection />
                <TemplatesSection />
                <PortfolioSection />
                <FaqSection />
                <InquirySection />
            </main>
            <footer class="siteFooter">
                <p>{ "문의는 아래 양식을 복사해 채팅으로 보내주세요." }</p>
            </footer>
        </>
    }
}
